use slam_core::{Auction, Call, ParseCallError};
use std::fmt::Write;

/// Parse a call list such as "1NT P 2C" or "1NT,P,2C". Any bad token fails
/// the whole list.
pub fn parse_calls(s: &str) -> Result<Vec<Call>, ParseCallError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<Call>)
        .collect()
}

pub fn format_calls(calls: &[Call]) -> String {
    calls
        .iter()
        .map(|call| call.render())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_row(idx: usize, seat: char, call: &str, note: &str) -> String {
    format!("{:<3} | {:<4} | {:<5} | {}", idx, seat, call, note)
}

pub fn format_table_header() -> String {
    let mut out = String::new();
    writeln!(out, "{:<3} | {:<4} | {:<5} | Note", "Idx", "Seat", "Call").unwrap();
    writeln!(out, "{:-<3}-+-{:-<4}-+-{:-<5}-+-------------", "", "", "").unwrap();
    out
}

/// One row per call, marking the bid the auction currently stands on.
pub fn format_history(auction: &Auction) -> String {
    let mut out = format_table_header();
    let standing = auction.calls().iter().rposition(Call::is_bid);
    for (idx, (seat, call)) in auction.iter().enumerate() {
        let note = if Some(idx) == standing {
            "last bid"
        } else {
            ""
        };
        writeln!(
            out,
            "{}",
            format_row(idx + 1, seat.to_char(), &call.render(), note)
        )
        .unwrap();
    }
    out
}

/// Short human summary of where the auction stands.
pub fn describe_status(auction: &Auction) -> String {
    if auction.is_passed_out() {
        return "passed out".to_string();
    }
    match (auction.final_contract(), auction.current_contract()) {
        (Some(contract), _) => format!("final contract {}", contract),
        (None, Some(contract)) => format!(
            "{} to call, standing on {}",
            auction.current_seat().name(),
            contract
        ),
        (None, None) => format!("{} to call, no bid yet", auction.current_seat().name()),
    }
}
