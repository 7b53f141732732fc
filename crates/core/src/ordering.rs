//! The total order over bids.
//!
//! `rank = level * 5 + strain index`, so 1C is 5 and 7NT is 39. The 35 bids
//! occupy 35 consecutive ranks. Passes, doubles and redoubles have no rank;
//! only [`Bid`] values can be compared.

use crate::call::{Bid, MAX_LEVEL, MIN_LEVEL};
use crate::strain::Strain;
use std::cmp::Ordering;

pub const BID_COUNT: usize = 35;

const STRAINS: u8 = Strain::ALL.len() as u8;
const LOWEST_RANK: u8 = MIN_LEVEL * STRAINS;

/// Ordering weight of a bid: higher outranks lower, equal means the same bid.
pub fn rank(bid: Bid) -> u8 {
    bid.level() * STRAINS + bid.strain().idx() as u8
}

impl Bid {
    pub fn rank(self) -> u8 {
        rank(self)
    }

    /// Dense position among all bids: 1C is 0, 7NT is 34.
    pub fn index(self) -> usize {
        (rank(self) - LOWEST_RANK) as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BID_COUNT {
            return None;
        }
        let level = MIN_LEVEL + (index / STRAINS as usize) as u8;
        let strain = Strain::from_idx(index % STRAINS as usize)?;
        Some(Bid::new_unchecked(level, strain))
    }

    /// All 35 bids from 1C to 7NT.
    pub fn all() -> impl Iterator<Item = Bid> {
        (0..BID_COUNT).filter_map(Bid::from_index)
    }

    /// The cheapest bid that outranks this one.
    pub fn next(self) -> Option<Self> {
        Bid::from_index(self.index() + 1)
    }

    pub fn outranks(self, other: Bid) -> bool {
        rank(self) > rank(other)
    }

    /// Cheapest bid in `strain` that outranks `above`, or the one-level bid
    /// when nothing has been bid yet.
    pub fn cheapest_in(strain: Strain, above: Option<Bid>) -> Option<Self> {
        let level = match above {
            None => MIN_LEVEL,
            Some(last) if strain > last.strain() => last.level(),
            Some(last) => last.level() + 1,
        };
        (level <= MAX_LEVEL).then(|| Bid::new_unchecked(level, strain))
    }
}

impl PartialOrd for Bid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(*self).cmp(&rank(*other))
    }
}
