//! Core value types shared across the crate.

mod location;
mod moves;
mod piece;

pub use location::{Location, Offset};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
