//! Call legality and auction bookkeeping for contract-bridge bidding.
//!
//! Everything here is pure and synchronous. An [`Auction`] is a plain owned
//! value; share one between threads only behind your own lock.

pub mod auction;
pub mod call;
pub mod contract;
pub mod error;
pub mod legality;
pub mod ordering;
pub mod seat;
pub mod strain;

pub use auction::{Auction, AuctionRecord, AuctionStatus};
pub use call::{Bid, Call};
pub use contract::{Contract, DoubleStatus};
pub use error::{AuctionError, AuctionResult, IllegalReason, ParseCallError};
pub use ordering::rank;
pub use seat::{Partnership, Seat};
pub use strain::Strain;
