pub mod game;

pub use game::{Color, Location, Move, Offset, Piece, PieceKind, Position, PositionBuilder};
