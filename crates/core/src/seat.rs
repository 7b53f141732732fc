use crate::error::ParseSeatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, seat: Seat) -> bool {
        seat.partnership() == self
    }

    pub fn opponent(self) -> Self {
        match self {
            Partnership::NS => Partnership::EW,
            Partnership::EW => Partnership::NS,
        }
    }
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn partnership(self) -> Partnership {
        match self {
            Seat::North | Seat::South => Partnership::NS,
            Seat::East | Seat::West => Partnership::EW,
        }
    }

    /// The seat that calls after this one (clockwise).
    pub fn next(self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// The seat `steps` calls after this one.
    pub fn advance(self, steps: usize) -> Self {
        Seat::ALL[(self.idx() + steps) % 4]
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn partner(self) -> Self {
        self.advance(2)
    }

    pub fn is_opponent_of(self, other: Seat) -> bool {
        self.partnership() != other.partnership()
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }
}

impl FromStr for Seat {
    type Err = ParseSeatError;

    /// Accepts a single letter ("n") or the full name ("North"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let seat = match (chars.next(), chars.next()) {
            (Some(c), None) => Seat::from_char(c),
            _ => Seat::ALL
                .into_iter()
                .find(|seat| seat.name().eq_ignore_ascii_case(trimmed)),
        };
        seat.ok_or_else(|| ParseSeatError(s.to_string()))
    }
}

impl TryFrom<String> for Seat {
    type Error = ParseSeatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Seat> for String {
    fn from(seat: Seat) -> Self {
        seat.to_char().to_string()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_next() {
        assert_eq!(Seat::North.next(), Seat::East);
        assert_eq!(Seat::West.next(), Seat::North);
        assert_eq!(Seat::South.advance(3), Seat::East);
        assert_eq!(Seat::East.partner(), Seat::West);
    }

    #[test]
    fn test_seat_char() {
        assert_eq!(Seat::North.to_char(), 'N');
        assert_eq!(Seat::from_char('w'), Some(Seat::West));
        assert_eq!(Seat::from_char('X'), None);
    }

    #[test]
    fn test_seat_parse() {
        assert_eq!("s".parse::<Seat>().unwrap(), Seat::South);
        assert_eq!("east".parse::<Seat>().unwrap(), Seat::East);
        assert_eq!(" NORTH ".parse::<Seat>().unwrap(), Seat::North);
        assert!("Northeast".parse::<Seat>().is_err());
        assert!("".parse::<Seat>().is_err());
    }

    #[test]
    fn test_partnership() {
        assert_eq!(Seat::North.partnership(), Partnership::NS);
        assert_eq!(Seat::South.partnership(), Partnership::NS);
        assert_eq!(Seat::East.partnership(), Partnership::EW);
        assert_eq!(Seat::West.partnership(), Partnership::EW);

        assert!(Partnership::NS.contains(Seat::South));
        assert!(!Partnership::NS.contains(Seat::East));
        assert_eq!(Partnership::EW.opponent(), Partnership::NS);

        assert!(Seat::North.is_opponent_of(Seat::East));
        assert!(!Seat::North.is_opponent_of(Seat::South));
    }
}
