//! Board position: a snapshot of the game that doubles as a search-tree node.

use std::fmt;

use crate::game::types::{Color, Location, Move, Piece, PieceKind};

/// A full board snapshot plus cached legal moves, evaluation, and memoized
/// child positions.
///
/// A position is a pure function of its parent and the move that reached
/// it; `legal_moves`, `score`, and the king caches never change after
/// construction. The `children` vector is index-aligned with
/// `legal_moves` and filled lazily as the search (or `attempt_move`)
/// materializes successors. Ownership is strictly tree-shaped: extracting
/// one child drops the parent together with every sibling subtree.
#[derive(Clone, Debug)]
pub struct Position {
    /// Color whose move produced this position; its opponent moves next.
    pub(crate) mover: Color,
    /// Rank-major grid: `grid[rank][file]`.
    pub(crate) grid: [[Piece; 8]; 8],
    pub(crate) white_king: Location,
    pub(crate) black_king: Location,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) score: i32,
    pub(crate) children: Vec<Option<Box<Position>>>,
}

impl Position {
    /// Create the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = [[Piece::Empty; 8]; 8];
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
            grid[0][file] = Piece::Occupied(Color::White, kind);
            grid[7][file] = Piece::Occupied(Color::Black, kind);
            grid[1][file] = Piece::Occupied(Color::White, PieceKind::Pawn);
            grid[6][file] = Piece::Occupied(Color::Black, PieceKind::Pawn);
        }

        let mut position = Position {
            mover: Color::Black,
            grid,
            white_king: Location(4, 0),
            black_king: Location(4, 7),
            legal_moves: Vec::new(),
            score: 0,
            children: Vec::new(),
        };
        position.finish();
        position
    }

    /// Create the successor reached by playing `mv` on `parent`.
    pub(crate) fn from_parent(parent: &Position, mv: Move) -> Self {
        let mut position = Position {
            mover: parent.mover.opponent(),
            grid: parent.grid,
            white_king: parent.white_king,
            black_king: parent.black_king,
            legal_moves: Vec::new(),
            score: 0,
            children: Vec::new(),
        };
        position.apply_move(mv);
        position.finish();
        position
    }

    /// Assemble a position from raw parts (used by `PositionBuilder`).
    pub(crate) fn from_parts(
        mover: Color,
        grid: [[Piece; 8]; 8],
        white_king: Location,
        black_king: Location,
    ) -> Self {
        let mut position = Position {
            mover,
            grid,
            white_king,
            black_king,
            legal_moves: Vec::new(),
            score: 0,
            children: Vec::new(),
        };
        position.finish();
        position
    }

    /// Compute the cached legal move list, evaluation, and empty child slots.
    fn finish(&mut self) {
        self.legal_moves = self.legal_moves_for(self.mover.opponent());
        self.score = self.evaluate();
        self.children = (0..self.legal_moves.len()).map(|_| None).collect();
    }

    /// Read a square. Both coordinates of `location` must be 0-7.
    #[inline]
    #[must_use]
    pub fn get(&self, location: Location) -> Piece {
        self.grid[location.rank()][location.file()]
    }

    #[inline]
    pub(crate) fn set(&mut self, location: Location, piece: Piece) {
        self.grid[location.rank()][location.file()] = piece;
    }

    /// The color that moves next.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.mover.opponent()
    }

    /// Legal moves for the side to move, in generation order.
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Cached location of a color's king.
    #[inline]
    pub(crate) fn king_location(&self, color: Color) -> Location {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// The side to move is in check but still has moves.
    #[must_use]
    pub fn is_check(&self) -> bool {
        !self.legal_moves.is_empty() && self.in_check(self.side_to_move())
    }

    /// The side to move has no legal moves and is in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.legal_moves.is_empty() && self.in_check(self.side_to_move())
    }

    /// The side to move has no legal moves but is not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.legal_moves.is_empty() && !self.in_check(self.side_to_move())
    }

    /// Move the piece at `mv.from` to `mv.to`, returning the displaced
    /// piece and maintaining the king caches.
    ///
    /// Exact inverse of [`Position::undo_move`]. Only used transiently on
    /// positions whose caches are not yet published; a finished position
    /// is never mutated.
    pub(crate) fn apply_move(&mut self, mv: Move) -> Piece {
        let captured = self.get(mv.to);
        let piece = self.get(mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, Piece::Empty);
        if let Piece::Occupied(color, PieceKind::King) = piece {
            match color {
                Color::White => self.white_king = mv.to,
                Color::Black => self.black_king = mv.to,
            }
        }
        captured
    }

    /// Reverse [`Position::apply_move`], restoring the displaced piece.
    pub(crate) fn undo_move(&mut self, mv: Move, captured: Piece) {
        let piece = self.get(mv.to);
        self.set(mv.from, piece);
        self.set(mv.to, captured);
        if let Piece::Occupied(color, PieceKind::King) = piece {
            match color {
                Color::White => self.white_king = mv.from,
                Color::Black => self.black_king = mv.from,
            }
        }
    }

    /// Materialize (or fetch the memoized) child for a legal move index.
    pub(crate) fn child(&mut self, index: usize) -> &mut Position {
        if self.children[index].is_none() {
            let child = Position::from_parent(self, self.legal_moves[index]);
            self.children[index] = Some(Box::new(child));
        }
        self.children[index]
            .as_deref_mut()
            .expect("child slot was just materialized")
    }

    /// Extract a child from the tree, materializing it first if needed.
    pub(crate) fn take_child(&mut self, index: usize) -> Position {
        self.child(index);
        match self.children[index].take() {
            Some(child) => *child,
            None => unreachable!("child slot was just materialized"),
        }
    }

    /// Play `mv` if it is legal, returning the resulting position.
    ///
    /// An illegal move (including one whose `from` square is empty) is a
    /// silent no-op: the position is returned unchanged, and the caller
    /// detects rejection by comparing against the position it passed in.
    /// On success the abandoned sibling subtrees are dropped in bulk.
    #[must_use]
    pub fn attempt_move(mut self, mv: Move) -> Position {
        match self.legal_moves.iter().position(|&m| m == mv) {
            Some(index) => self.take_child(index),
            None => self,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Positions compare by board content and side to move, ignoring any
/// memoized children.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.mover == other.mover && self.grid == other.grid
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                write!(f, " {}", self.grid[rank][file].to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}
