//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::MoveParseError;
use crate::game::types::Location;

/// A move from one square to another.
///
/// Carries no capture or special-move metadata; this rule set has no
/// castling, en passant, or promotion, so (from, to) identifies a move
/// completely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        let from: Location = String::from_iter(&chars[..2]).parse().map_err(|_| {
            MoveParseError::InvalidSquare {
                notation: s.to_string(),
            }
        })?;
        let to: Location = String::from_iter(&chars[2..]).parse().map_err(|_| {
            MoveParseError::InvalidSquare {
                notation: s.to_string(),
            }
        })?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from, Location(4, 1));
        assert_eq!(mv.to, Location(4, 3));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!("e2e9".parse::<Move>().is_err());
        assert!("z2e4".parse::<Move>().is_err());
    }

    #[test]
    fn test_equality_by_value() {
        let a = Move::new(Location(0, 1), Location(0, 3));
        let b: Move = "a2a4".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Move::new(Location(0, 1), Location(0, 2)));
    }
}
