//! Fluent builder for constructing arbitrary positions.
//!
//! Allows creating positions piece by piece rather than playing out a
//! move sequence, mainly for tests and analysis tooling.
//!
//! # Example
//! ```
//! use chess_tree::game::{Color, Location, PieceKind, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece(Location(4, 0), Color::White, PieceKind::King)
//!     .piece(Location(4, 7), Color::Black, PieceKind::King)
//!     .piece(Location(0, 1), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! ```

use crate::game::error::PositionError;
use crate::game::types::{Color, Location, Piece, PieceKind};
use crate::game::Position;

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Location, Color, PieceKind)>,
    side_to_move: Color,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder holding the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder.pieces.push((Location(file, 0), Color::White, kind));
            builder.pieces.push((Location(file, 7), Color::Black, kind));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Location(file, 1), Color::White, PieceKind::Pawn));
            builder
                .pieces
                .push((Location(file, 6), Color::Black, PieceKind::Pawn));
        }

        builder
    }

    /// Place a piece, replacing whatever occupied the square.
    #[must_use]
    pub fn piece(mut self, location: Location, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(loc, _, _)| *loc != location);
        self.pieces.push((location, color, kind));
        self
    }

    /// Remove the piece on a square.
    #[must_use]
    pub fn clear(mut self, location: Location) -> Self {
        self.pieces.retain(|(loc, _, _)| *loc != location);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the position, computing its legal moves and evaluation.
    ///
    /// Fails unless the board holds exactly one king of each color, the
    /// invariant the position's king caches depend on.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut grid = [[Piece::Empty; 8]; 8];
        let mut white_king = None;
        let mut black_king = None;

        for (location, color, kind) in self.pieces {
            grid[location.rank()][location.file()] = Piece::Occupied(color, kind);
            if kind == PieceKind::King {
                let slot = match color {
                    Color::White => &mut white_king,
                    Color::Black => &mut black_king,
                };
                if slot.replace(location).is_some() {
                    return Err(PositionError::DuplicateKing { color });
                }
            }
        }

        let white_king = white_king.ok_or(PositionError::MissingKing {
            color: Color::White,
        })?;
        let black_king = black_king.ok_or(PositionError::MissingKing {
            color: Color::Black,
        })?;

        Ok(Position::from_parts(
            self.side_to_move.opponent(),
            grid,
            white_king,
            black_king,
        ))
    }
}
