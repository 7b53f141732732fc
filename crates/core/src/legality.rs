//! Whether a call may be made next. Nothing here mutates an auction; the
//! auction runs [`check`] itself before recording a call.

use crate::auction::Auction;
use crate::call::{Bid, Call};
use crate::error::IllegalReason;

/// Checks `call` as the next call of `auction`, made by the seat whose turn
/// it is.
pub fn check(call: Call, auction: &Auction) -> Result<(), IllegalReason> {
    if auction.is_terminal() {
        return Err(IllegalReason::AuctionTerminal);
    }
    let caller = auction.current_seat();

    match call {
        Call::Pass => Ok(()),
        Call::Bid(bid) => match auction.last_bid() {
            Some((_, last)) if !bid.outranks(last) => Err(IllegalReason::NotHigherThanLastBid),
            _ => Ok(()),
        },
        // The most recent non-pass call must be an opponent's bid. A double
        // or redouble in between means the bid is no longer undoubled.
        Call::Double => match auction.last_action() {
            Some((seat, Call::Bid(_))) if seat.is_opponent_of(caller) => Ok(()),
            _ => Err(IllegalReason::DoubleNotApplicable),
        },
        Call::Redouble => match auction.last_action() {
            Some((seat, Call::Double)) if seat.is_opponent_of(caller) => Ok(()),
            _ => Err(IllegalReason::RedoubleNotApplicable),
        },
    }
}

pub fn is_legal(call: Call, auction: &Auction) -> bool {
    check(call, auction).is_ok()
}

/// Every legal next call: pass, double, redouble, then bids ascending.
/// Empty once the auction is over.
pub fn legal_calls(auction: &Auction) -> Vec<Call> {
    if auction.is_terminal() {
        return Vec::new();
    }
    let mut calls: Vec<Call> = [Call::Pass, Call::Double, Call::Redouble]
        .into_iter()
        .filter(|call| is_legal(*call, auction))
        .collect();
    let first = match auction.last_bid() {
        Some((_, last)) => last.next(),
        None => Bid::from_index(0),
    };
    if let Some(first) = first {
        calls.extend(Bid::all().skip(first.index()).map(Call::Bid));
    }
    calls
}
