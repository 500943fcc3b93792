//! Chess game state and automated move selection.
//!
//! A [`Position`] is both a board snapshot and a node in the search tree:
//! it caches its legal moves and static evaluation at construction and
//! memoizes child positions as the search materializes them.
//!
//! # Example
//! ```
//! use chess_tree::game::Position;
//!
//! let position = Position::new();
//! println!(
//!     "Starting position has {} legal moves",
//!     position.legal_moves().len()
//! );
//! ```
//!
//! This rule set deliberately omits castling, en passant, promotion, and
//! draw-by-repetition/fifty-move accounting.

mod builder;
mod check;
mod error;
mod eval;
mod movegen;
mod offsets;
mod position;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{LocationError, MoveParseError, PositionError};
pub use position::Position;
pub use types::{Color, Location, Move, Offset, Piece, PieceKind};
