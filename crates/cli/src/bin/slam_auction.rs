use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slam_cli::notation::{describe_status, format_calls, format_history, parse_calls};
use slam_cli::random::random_auction;
use slam_cli::vet_suggestion;
use slam_core::{Auction, Seat};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay bridge auctions, list legal calls and vet suggested calls"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct AuctionArgs {
    /// Dealer seat (N, E, S or W)
    #[arg(short, long, env = "SLAM_DEALER", default_value = "N")]
    dealer: Seat,

    /// Calls so far, e.g. "1NT P 2C P" (space or comma separated)
    calls: Vec<String>,
}

impl AuctionArgs {
    fn replay(&self) -> Result<Auction> {
        replay(self.dealer, &self.calls.join(" "))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an auction and show the history, status and legal next calls
    Replay(AuctionArgs),

    /// List the legal next calls
    Legal(AuctionArgs),

    /// Check a model response against the auction; prints the vetted JSON
    Vet {
        /// Dealer seat (N, E, S or W)
        #[arg(short, long, env = "SLAM_DEALER", default_value = "N")]
        dealer: Seat,

        /// Calls so far, e.g. "1NT P" (space or comma separated)
        #[arg(short, long, default_value = "")]
        calls: String,

        /// File holding the raw model response ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        response: PathBuf,
    },

    /// Play random legal auctions to completion
    Random {
        /// Random seed for reproducible runs (random if omitted, always printed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of auctions to play
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Probability of passing on each turn
        #[arg(long, default_value_t = 0.6)]
        pass_chance: f64,
    },
}

/// Replays calls one at a time so a failure can show how far the auction got.
fn replay(dealer: Seat, calls: &str) -> Result<Auction> {
    let calls = parse_calls(calls).context("could not read calls")?;
    let mut auction = Auction::new(dealer);
    for call in calls {
        let seat = auction.current_seat();
        if let Err(e) = auction.apply_call(seat, call) {
            print!("{}", format_history(&auction));
            bail!("call {} by {}: {}", auction.len() + 1, seat.name(), e);
        }
    }
    Ok(auction)
}

fn print_legal_calls(auction: &Auction) {
    let legal = auction.legal_calls();
    if legal.is_empty() {
        println!("No legal calls: the auction is over.");
    } else {
        println!("Legal calls: {}", format_calls(&legal));
    }
}

fn read_response(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("could not read response from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Replay(auction_args) => {
            let auction = auction_args.replay()?;
            println!("Dealer: {}", auction.dealer().name());
            print!("{}", format_history(&auction));
            println!();
            println!("Status: {}", describe_status(&auction));
            print_legal_calls(&auction);
        }
        Command::Legal(auction_args) => {
            let auction = auction_args.replay()?;
            print_legal_calls(&auction);
        }
        Command::Vet {
            dealer,
            calls,
            response,
        } => {
            let auction = replay(dealer, &calls)?;
            let raw = read_response(&response)?;
            let vetted = vet_suggestion(&auction, &raw);
            println!("{}", serde_json::to_string_pretty(&vetted)?);
        }
        Command::Random {
            seed,
            count,
            pass_chance,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Seed: {}", seed);
            info!("playing {} random auctions", count);
            let mut rng = StdRng::seed_from_u64(seed);
            for i in 1..=count {
                let auction = random_auction(&mut rng, pass_chance)?;
                println!(
                    "{:>3}. [{}] {}  =>  {}",
                    i,
                    auction.dealer(),
                    format_calls(auction.calls()),
                    describe_status(&auction)
                );
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
