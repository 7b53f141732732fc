use crate::error::ParseCallError;
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 7;

/// A level and strain. Only constructible with a level in 1..=7, so every
/// `Bid` in circulation is one of the 35 real bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bid {
    level: u8,
    strain: Strain,
}

impl Bid {
    pub fn new(level: u8, strain: Strain) -> Result<Self, ParseCallError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self { level, strain })
        } else {
            Err(ParseCallError::BadLevel(format!("{}{}", level, strain)))
        }
    }

    pub(crate) const fn new_unchecked(level: u8, strain: Strain) -> Self {
        Self { level, strain }
    }

    pub fn level(self) -> u8 {
        self.level
    }

    pub fn strain(self) -> Strain {
        self.strain
    }

    pub fn render(self) -> String {
        format!("{}{}", self.level, self.strain.code())
    }

    /// Display form with suit symbols, e.g. "2♣" or "3NT".
    pub fn pretty(self) -> String {
        format!("{}{}", self.level, self.strain.symbol())
    }
}

impl FromStr for Bid {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Call>()? {
            Call::Bid(bid) => Ok(bid),
            _ => Err(ParseCallError::Unrecognized(s.to_string())),
        }
    }
}

impl TryFrom<String> for Bid {
    type Error = ParseCallError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bid> for String {
    fn from(bid: Bid) -> Self {
        bid.render()
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain.code())
    }
}

/// One utterance in an auction. Only the `Bid` variant is ordered; pass,
/// double and redouble never move the last-bid reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid(Bid),
}

impl Call {
    /// Builds a bid call, rejecting levels outside 1..=7.
    pub fn bid(level: u8, strain: Strain) -> Result<Self, ParseCallError> {
        Bid::new(level, strain).map(Call::Bid)
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    pub fn as_bid(&self) -> Option<Bid> {
        match self {
            Call::Bid(bid) => Some(*bid),
            _ => None,
        }
    }

    /// Returns the level of this call, if it's a bid.
    pub fn level(&self) -> Option<u8> {
        self.as_bid().map(Bid::level)
    }

    /// Returns the strain of this call, if it's a bid.
    pub fn strain(&self) -> Option<Strain> {
        self.as_bid().map(Bid::strain)
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "Pass".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid(bid) => bid.render(),
        }
    }
}

impl From<Bid> for Call {
    fn from(bid: Bid) -> Self {
        Call::Bid(bid)
    }
}

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseCallError::Empty);
        }
        let upper = trimmed.to_ascii_uppercase();
        match upper.as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }

        let mut chars = trimmed.chars();
        let level = match chars.next().and_then(|c| c.to_digit(10)) {
            Some(digit) => digit as u8,
            None => return Err(ParseCallError::Unrecognized(trimmed.to_string())),
        };
        let rest = chars.as_str();
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level)
            || rest.starts_with(|c: char| c.is_ascii_digit())
        {
            return Err(ParseCallError::BadLevel(trimmed.to_string()));
        }
        let strain =
            Strain::from_code(rest).ok_or_else(|| ParseCallError::BadStrain(trimmed.to_string()))?;
        Ok(Call::Bid(Bid::new_unchecked(level, strain)))
    }
}

impl TryFrom<String> for Call {
    type Error = ParseCallError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Call> for String {
    fn from(call: Call) -> Self {
        call.render()
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Bid(bid) => write!(f, "{}", bid),
            other => f.write_str(&other.render()),
        }
    }
}
