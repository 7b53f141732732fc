use crate::error::ParseCallError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The denomination of a bid, declared in ascending bidding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Clubs,
        Strain::Diamonds,
        Strain::Hearts,
        Strain::Spades,
        Strain::NoTrump,
    ];

    /// Position of the strain within a level: Clubs 0 up to NoTrump 4.
    pub fn idx(self) -> usize {
        match self {
            Strain::Clubs => 0,
            Strain::Diamonds => 1,
            Strain::Hearts => 2,
            Strain::Spades => 3,
            Strain::NoTrump => 4,
        }
    }

    pub fn from_idx(idx: usize) -> Option<Self> {
        Strain::ALL.get(idx).copied()
    }

    pub fn code(self) -> &'static str {
        match self {
            Strain::Clubs => "C",
            Strain::Diamonds => "D",
            Strain::Hearts => "H",
            Strain::Spades => "S",
            Strain::NoTrump => "NT",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Strain::Clubs => "♣",
            Strain::Diamonds => "♦",
            Strain::Hearts => "♥",
            Strain::Spades => "♠",
            Strain::NoTrump => "NT",
        }
    }

    /// Parses the strain part of a bid. Accepts the letter codes (any case),
    /// "N" as shorthand for no-trump, and the suit symbols with or without
    /// the emoji presentation selector.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_end_matches('\u{FE0F}');
        match code.to_ascii_uppercase().as_str() {
            "C" | "♣" | "♧" => Some(Strain::Clubs),
            "D" | "♦" | "♢" => Some(Strain::Diamonds),
            "H" | "♥" | "♡" => Some(Strain::Hearts),
            "S" | "♠" | "♤" => Some(Strain::Spades),
            "NT" | "N" => Some(Strain::NoTrump),
            _ => None,
        }
    }
}

impl FromStr for Strain {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strain::from_code(s.trim()).ok_or_else(|| ParseCallError::BadStrain(s.to_string()))
    }
}

impl TryFrom<String> for Strain {
    type Error = ParseCallError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strain> for String {
    fn from(strain: Strain) -> Self {
        strain.code().to_string()
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
