//! Board locations and direction offsets.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::LocationError;

/// A square on the board, represented as (file, rank).
///
/// Both coordinates are expected to be 0-7; the type itself enforces no
/// bounds. All internal iteration produces in-range values, and external
/// input should go through [`Location::try_from`] or [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location(pub usize, pub usize); // (file, rank)

impl Location {
    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank (0-7, where 0 = rank 1, White's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Step by an offset, returning `None` when the result leaves the board.
    ///
    /// This is the single bounds check the move generator and check
    /// detector rely on.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: Offset) -> Option<Location> {
        let file = self.0 as isize + delta.0;
        let rank = self.1 as isize + delta.1;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Location(file as usize, rank as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl TryFrom<(usize, usize)> for Location {
    type Error = LocationError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(LocationError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(LocationError::RankOutOfBounds { rank });
        }
        Ok(Location(file, rank))
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(LocationError::InvalidNotation {
                notation: s.to_string(),
            });
        };

        let file = match file_char {
            'a'..='h' => file_char as usize - 'a' as usize,
            _ => {
                return Err(LocationError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as usize - '1' as usize,
            _ => {
                return Err(LocationError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Location(file, rank))
    }
}

/// A (file delta, rank delta) direction used by the piece movement tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset(pub isize, pub isize);

impl Offset {
    /// Whether this offset runs along a rank or file.
    #[inline]
    #[must_use]
    pub(crate) const fn is_orthogonal(self) -> bool {
        self.0 == 0 || self.1 == 0
    }
}
