use crate::call::Bid;
use crate::seat::{Partnership, Seat};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

impl DoubleStatus {
    pub fn suffix(self) -> &'static str {
        match self {
            DoubleStatus::Undoubled => "",
            DoubleStatus::Doubled => "X",
            DoubleStatus::Redoubled => "XX",
        }
    }
}

/// The bid an auction stopped on, with its doubling state.
///
/// `bidder` is the seat that made the final bid; `declarer` is the first
/// player of that partnership to name the strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub bid: Bid,
    pub double_status: DoubleStatus,
    pub bidder: Seat,
    pub declarer: Seat,
}

impl Contract {
    pub fn partnership(&self) -> Partnership {
        self.declarer.partnership()
    }

    pub fn belongs_to(&self, partnership: Partnership) -> bool {
        self.partnership() == partnership
    }

    pub fn is_doubled(&self) -> bool {
        self.double_status != DoubleStatus::Undoubled
    }
}

impl fmt::Display for Contract {
    /// "4SX by East", or "3NT by North (bid by South)" when the final bid
    /// came from declarer's partner.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} by {}",
            self.bid,
            self.double_status.suffix(),
            self.declarer.name()
        )?;
        if self.bidder != self.declarer {
            write!(f, " (bid by {})", self.bidder.name())?;
        }
        Ok(())
    }
}
