//! Error types for auction handling.

use crate::call::Call;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text that does not name a valid call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCallError {
    #[error("empty call")]
    Empty,

    /// Level missing or outside 1..=7.
    #[error("invalid bid level in {0:?}")]
    BadLevel(String),

    /// Unknown strain after a valid level.
    #[error("invalid strain in {0:?}")]
    BadStrain(String),

    #[error("unrecognized call {0:?}")]
    Unrecognized(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized seat {0:?}")]
pub struct ParseSeatError(pub String);

/// Why a call may not be made at this point of the auction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalReason {
    #[error("not higher than last bid")]
    NotHigherThanLastBid,

    #[error("double not applicable")]
    DoubleNotApplicable,

    #[error("redouble not applicable")]
    RedoubleNotApplicable,

    #[error("auction already terminal")]
    AuctionTerminal,
}

/// Main error type for auction operations. Every variant is recoverable:
/// the auction that produced it is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("malformed call: {0}")]
    MalformedCall(#[from] ParseCallError),

    #[error("out of turn: {actual} called but it is {expected}'s turn")]
    OutOfTurn { expected: Seat, actual: Seat },

    #[error("illegal call {call}: {reason}")]
    IllegalCall { call: Call, reason: IllegalReason },

    #[error("auction is already complete")]
    InvalidState,
}

/// Result type alias for auction operations
pub type AuctionResult<T> = Result<T, AuctionError>;
