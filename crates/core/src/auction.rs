use crate::call::{Bid, Call};
use crate::contract::{Contract, DoubleStatus};
use crate::error::{AuctionError, AuctionResult};
use crate::legality;
use crate::seat::{Partnership, Seat};
use crate::strain::Strain;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuctionStatus {
    #[default]
    InProgress,
    /// Four passes and no bid.
    PassedOut,
    /// Three passes after the last bid, double or redouble.
    ContractReached,
}

impl AuctionStatus {
    pub fn is_terminal(self) -> bool {
        self != AuctionStatus::InProgress
    }
}

/// The calls of one deal, in order, starting with the dealer.
///
/// Calls can only be added through [`Auction::apply_call`], which checks
/// turn order and legality first, so an `Auction` always holds a legal
/// history. A failed call leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "AuctionRecord", into = "AuctionRecord")]
pub struct Auction {
    dealer: Seat,
    calls: Vec<Call>,
    last_bid: Option<(Seat, Bid)>,
    last_action: Option<(Seat, Call)>,
    double_status: DoubleStatus,
    consecutive_passes: usize,
    status: AuctionStatus,
}

/// Wire form of an auction: the dealer and the calls. Deserializing replays
/// the calls, so a stored auction can't smuggle in an illegal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionRecord {
    pub dealer: Seat,
    #[serde(default)]
    pub calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            ..Self::default()
        }
    }

    /// Rebuilds an auction call by call, stopping at the first bad one.
    pub fn replay(dealer: Seat, calls: impl IntoIterator<Item = Call>) -> AuctionResult<Self> {
        let mut auction = Self::new(dealer);
        for call in calls {
            auction.call(call)?;
        }
        Ok(auction)
    }

    /// Build an auction from space-separated calls like "P 1C P 2C".
    pub fn from_text(dealer: Seat, calls: &str) -> AuctionResult<Self> {
        let mut auction = Self::new(dealer);
        for token in calls.split_whitespace() {
            auction.call(token.parse()?)?;
        }
        Ok(auction)
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, Call)> + '_ {
        let dealer = self.dealer;
        self.calls
            .iter()
            .enumerate()
            .map(move |(i, call)| (dealer.advance(i), *call))
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_passed_out(&self) -> bool {
        self.status == AuctionStatus::PassedOut
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.dealer.advance(self.calls.len())
    }

    pub fn current_partnership(&self) -> Partnership {
        self.current_seat().partnership()
    }

    /// The last bid (not pass/double/redouble) and who made it.
    pub fn last_bid(&self) -> Option<(Seat, Bid)> {
        self.last_bid
    }

    /// The most recent call that wasn't a pass, and who made it.
    pub fn last_action(&self) -> Option<(Seat, Call)> {
        self.last_action
    }

    pub fn double_status(&self) -> DoubleStatus {
        self.double_status
    }

    /// Passes since the last non-pass call, or since the start.
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn is_open(&self) -> bool {
        self.last_bid.is_some()
    }

    pub fn opener(&self) -> Option<Seat> {
        self.iter()
            .find(|(_, call)| call.is_bid())
            .map(|(seat, _)| seat)
    }

    /// Returns the minimum legal bid for the given strain.
    pub fn minimum_bid_in(&self, strain: Strain) -> Option<Bid> {
        if self.is_terminal() {
            return None;
        }
        Bid::cheapest_in(strain, self.last_bid.map(|(_, bid)| bid))
    }

    pub fn is_legal(&self, call: Call) -> bool {
        legality::is_legal(call, self)
    }

    /// Return all calls that would be legal as the next call in this auction.
    pub fn legal_calls(&self) -> Vec<Call> {
        legality::legal_calls(self)
    }

    /// Appends `call` for `seat` after checking that the auction is still
    /// running, that it is `seat`'s turn and that the call is legal.
    pub fn apply_call(&mut self, seat: Seat, call: Call) -> AuctionResult<()> {
        if self.is_terminal() {
            return Err(AuctionError::InvalidState);
        }
        let expected = self.current_seat();
        if seat != expected {
            return Err(AuctionError::OutOfTurn {
                expected,
                actual: seat,
            });
        }
        legality::check(call, self).map_err(|reason| AuctionError::IllegalCall { call, reason })?;
        self.record(seat, call);
        Ok(())
    }

    /// Parses `text` and applies it for `seat`.
    pub fn apply_text(&mut self, seat: Seat, text: &str) -> AuctionResult<()> {
        let call = text.parse()?;
        self.apply_call(seat, call)
    }

    /// Applies `call` for whoever's turn it is.
    pub fn call(&mut self, call: Call) -> AuctionResult<()> {
        self.apply_call(self.current_seat(), call)
    }

    fn record(&mut self, seat: Seat, call: Call) {
        match call {
            Call::Pass => self.consecutive_passes += 1,
            Call::Bid(bid) => {
                self.last_bid = Some((seat, bid));
                self.double_status = DoubleStatus::Undoubled;
            }
            Call::Double => self.double_status = DoubleStatus::Doubled,
            Call::Redouble => self.double_status = DoubleStatus::Redoubled,
        }
        if !call.is_pass() {
            self.last_action = Some((seat, call));
            self.consecutive_passes = 0;
        }
        self.calls.push(call);
        debug!("{} calls {} (call {})", seat.name(), call, self.calls.len());

        self.status = match self.last_bid {
            None if self.consecutive_passes >= 4 => AuctionStatus::PassedOut,
            Some(_) if self.consecutive_passes >= 3 => AuctionStatus::ContractReached,
            _ => AuctionStatus::InProgress,
        };
        match self.status {
            AuctionStatus::PassedOut => debug!("auction passed out"),
            AuctionStatus::ContractReached => {
                if let Some(contract) = self.current_contract() {
                    debug!("auction complete: {}", contract);
                }
            }
            AuctionStatus::InProgress => {}
        }
    }

    /// The contract if the auction ended now.
    pub fn current_contract(&self) -> Option<Contract> {
        let (bidder, bid) = self.last_bid?;
        let partnership = bidder.partnership();
        let declarer = self
            .iter()
            .find(|(seat, call)| {
                seat.partnership() == partnership && call.strain() == Some(bid.strain())
            })
            .map(|(seat, _)| seat)
            .unwrap_or(bidder);
        Some(Contract {
            bid,
            double_status: self.double_status,
            bidder,
            declarer,
        })
    }

    /// The contract of a completed auction; `None` while bidding continues
    /// or when the deal was passed out.
    pub fn final_contract(&self) -> Option<Contract> {
        match self.status {
            AuctionStatus::ContractReached => self.current_contract(),
            _ => None,
        }
    }
}

impl TryFrom<AuctionRecord> for Auction {
    type Error = AuctionError;

    fn try_from(record: AuctionRecord) -> Result<Self, Self::Error> {
        Auction::replay(record.dealer, record.calls)
    }
}

impl From<Auction> for AuctionRecord {
    fn from(auction: Auction) -> Self {
        AuctionRecord {
            dealer: auction.dealer,
            calls: auction.calls,
        }
    }
}
