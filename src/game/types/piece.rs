//! Piece, piece-kind, and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// The far rank a pawn cannot advance past (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_last_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material magnitude: Pawn=1, Rook/Knight/Bishop=5, Queen=10, King=0.
    ///
    /// The king carries no material weight; losing it ends the game and is
    /// priced by the checkmate bonus instead.
    #[inline]
    #[must_use]
    pub const fn magnitude(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }

    /// Returns true if this kind attacks along ranks/files (Rook, Queen)
    #[inline]
    #[must_use]
    pub(crate) const fn attacks_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this kind attacks diagonally (Bishop, Queen)
    #[inline]
    #[must_use]
    pub(crate) const fn attacks_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Convert to a lowercase character (p, r, n, b, q, k)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a kind from a character (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// The contents of one board square: a colored piece or the empty sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Owning color, `None` for an empty square
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(color, _) => Some(color),
        }
    }

    /// Piece kind, `None` for an empty square
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(_, kind) => Some(kind),
        }
    }

    /// True when the square holds a piece of the opposite color.
    #[inline]
    #[must_use]
    pub fn is_enemy_of(self, color: Color) -> bool {
        matches!(self, Piece::Occupied(owner, _) if owner != color)
    }

    /// Signed material value: magnitude for White, negated for Black, 0 when empty.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Empty => 0,
            Piece::Occupied(color, kind) => kind.magnitude() * color.sign(),
        }
    }

    /// Character form with case based on color (uppercase for White), '.' when empty
    #[inline]
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Occupied(Color::White, kind) => kind.to_char().to_ascii_uppercase(),
            Piece::Occupied(Color::Black, kind) => kind.to_char(),
        }
    }
}
