use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use slam_core::{Auction, AuctionStatus, Call, IllegalReason, Seat};

/// Picks a random legal call, leaning on Pass so auctions finish quickly.
fn random_call(auction: &Auction, rng: &mut StdRng) -> Call {
    let legal = auction.legal_calls();
    if rng.gen_bool(0.6) {
        Call::Pass
    } else {
        *legal.choose(rng).expect("a running auction always has a legal call")
    }
}

fn random_auction(rng: &mut StdRng) -> Auction {
    let dealer = Seat::ALL[rng.gen_range(0..4)];
    let mut auction = Auction::new(dealer);
    while !auction.is_terminal() {
        let call = random_call(&auction, rng);
        auction.call(call).unwrap();
    }
    auction
}

#[test]
fn test_random_auctions_terminate_consistently() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let auction = random_auction(&mut rng);
        let replayed = Auction::replay(auction.dealer(), auction.calls().iter().copied()).unwrap();
        assert_eq!(replayed, auction);

        let calls = auction.calls();
        assert!(calls.len() >= 4);
        assert!(calls[calls.len() - 3..].iter().all(Call::is_pass));

        match auction.status() {
            AuctionStatus::PassedOut => {
                assert_eq!(calls.len(), 4);
                assert_eq!(auction.final_contract(), None);
            }
            AuctionStatus::ContractReached => {
                let contract = auction.final_contract().unwrap();
                let (bidder, bid) = auction.last_bid().unwrap();
                assert_eq!(contract.bid, bid);
                assert_eq!(contract.bidder, bidder);
                assert_eq!(contract.declarer.partnership(), bidder.partnership());
            }
            AuctionStatus::InProgress => panic!("auction did not finish"),
        }
        assert!(auction.legal_calls().is_empty());
    }
}

#[test]
fn test_random_auctions_bids_strictly_increase() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let auction = random_auction(&mut rng);
        let ranks: Vec<u8> = auction
            .calls()
            .iter()
            .filter_map(Call::as_bid)
            .map(|bid| bid.rank())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]), "{:?}", auction.calls());
    }
}

#[test]
fn test_random_states_agree_with_legal_calls() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut auction = Auction::new(Seat::North);
        while !auction.is_terminal() {
            let legal = auction.legal_calls();
            assert_eq!(legal.first(), Some(&Call::Pass));
            for call in [Call::Double, Call::Redouble] {
                assert_eq!(auction.is_legal(call), legal.contains(&call));
            }
            for bid in slam_core::Bid::all() {
                let call = Call::Bid(bid);
                assert_eq!(auction.is_legal(call), legal.contains(&call));
            }

            // A rejected call never changes the auction.
            let illegal = [Call::Double, Call::Redouble]
                .into_iter()
                .find(|c| !legal.contains(c));
            if let Some(call) = illegal {
                let before = auction.clone();
                assert!(auction.call(call).is_err());
                assert_eq!(auction, before);
            }

            let call = random_call(&auction, &mut rng);
            auction.call(call).unwrap();
        }
        assert_eq!(
            slam_core::legality::check(Call::Pass, &auction),
            Err(IllegalReason::AuctionTerminal)
        );
    }
}
