//! Unit tests for game state, move generation, and search.

mod proptest;

use crate::game::{Color, Location, Move, PieceKind, Position, PositionBuilder};

/// Play out a sequence of moves given in coordinate notation, panicking
/// if any of them is rejected.
pub(crate) fn play_moves(mut position: Position, moves: &[&str]) -> Position {
    for notation in moves {
        let mv: Move = notation.parse().expect("bad move notation in test");
        let before = position.clone();
        position = position.attempt_move(mv);
        assert_ne!(position, before, "move {notation} was rejected");
    }
    position
}

/// The Fool's Mate position: White checkmated in two moves.
pub(crate) fn fools_mate() -> Position {
    play_moves(Position::new(), &["f2f3", "e7e5", "g2g4", "d8h4"])
}

/// Classic queen stalemate: Black to move with no legal moves, not in check.
pub(crate) fn queen_stalemate() -> Position {
    PositionBuilder::new()
        .piece(Location(0, 7), Color::Black, PieceKind::King)
        .piece(Location(2, 6), Color::White, PieceKind::Queen)
        .piece(Location(1, 5), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build()
        .expect("stalemate setup is valid")
}

/// Rook-on-the-back-rank mate: Black to move, checkmated behind own pawns.
pub(crate) fn back_rank_mate() -> Position {
    PositionBuilder::new()
        .piece(Location(6, 7), Color::Black, PieceKind::King)
        .piece(Location(5, 6), Color::Black, PieceKind::Pawn)
        .piece(Location(6, 6), Color::Black, PieceKind::Pawn)
        .piece(Location(7, 6), Color::Black, PieceKind::Pawn)
        .piece(Location(0, 7), Color::White, PieceKind::Rook)
        .piece(Location(6, 0), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build()
        .expect("mate setup is valid")
}
