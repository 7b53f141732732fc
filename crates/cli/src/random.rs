use rand::distributions::{Bernoulli, Distribution};
use rand::seq::SliceRandom;
use rand::Rng;
use slam_core::{Auction, AuctionError, Call, Seat};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomAuctionError {
    #[error("pass chance must be between 0 and 1, got {0}")]
    BadPassChance(f64),

    #[error(transparent)]
    Auction(#[from] AuctionError),
}

/// Plays an auction to completion with random legal calls. `pass_chance` is
/// the probability of passing on any turn; otherwise the call is drawn
/// uniformly from the legal calls (which include Pass).
pub fn random_auction<R: Rng>(rng: &mut R, pass_chance: f64) -> Result<Auction, RandomAuctionError> {
    let pass = Bernoulli::new(pass_chance)
        .map_err(|_| RandomAuctionError::BadPassChance(pass_chance))?;
    let dealer = Seat::ALL[rng.gen_range(0..Seat::ALL.len())];
    let mut auction = Auction::new(dealer);
    while !auction.is_terminal() {
        let call = if pass.sample(rng) {
            Call::Pass
        } else {
            auction
                .legal_calls()
                .choose(rng)
                .copied()
                .unwrap_or(Call::Pass)
        };
        auction.call(call)?;
    }
    Ok(auction)
}
