//! Legal move generation.
//!
//! Candidate moves follow each piece's movement rule and are kept only if
//! playing them leaves the moving side's own king out of check, tested
//! with a transient apply/check/undo. List order is deterministic:
//! rank-major board scan, then the fixed offset/direction table order.

use crate::game::offsets::{
    king_targets, knight_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::game::types::{Color, Location, Move, Offset, Piece, PieceKind};
use crate::game::Position;

impl Position {
    /// Generate every legal move for `color` on this board.
    pub(crate) fn legal_moves_for(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Location(file, rank);
                if self.get(from).color() == Some(color) {
                    self.piece_moves(from, &mut moves);
                }
            }
        }
        moves
    }

    fn piece_moves(&mut self, from: Location, moves: &mut Vec<Move>) {
        let Piece::Occupied(color, kind) = self.get(from) else {
            return;
        };
        match kind {
            PieceKind::Pawn => self.pawn_moves(from, color, moves),
            PieceKind::Rook => self.slider_moves(from, color, &ROOK_DIRECTIONS, moves),
            PieceKind::Knight => self.leaper_moves(from, color, knight_targets(from), moves),
            PieceKind::Bishop => self.slider_moves(from, color, &BISHOP_DIRECTIONS, moves),
            PieceKind::Queen => self.slider_moves(from, color, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => self.leaper_moves(from, color, king_targets(from), moves),
        }
    }

    fn pawn_moves(&mut self, from: Location, color: Color, moves: &mut Vec<Move>) {
        // No promotion exists; a pawn on its last rank has nowhere to go.
        if from.rank() == color.pawn_last_rank() {
            return;
        }
        let forward = Offset(0, color.pawn_direction());

        if let Some(to) = from.offset(forward) {
            if self.get(to).is_empty() {
                self.push_if_safe(color, Move::new(from, to), moves);
                // Double step, only from the start rank and only through
                // an empty intermediate square.
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = to.offset(forward) {
                        if self.get(double).is_empty() {
                            self.push_if_safe(color, Move::new(from, double), moves);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            if let Some(to) = from.offset(Offset(file_delta, color.pawn_direction())) {
                if self.get(to).is_enemy_of(color) {
                    self.push_if_safe(color, Move::new(from, to), moves);
                }
            }
        }
    }

    fn leaper_moves(
        &mut self,
        from: Location,
        color: Color,
        targets: &[Location],
        moves: &mut Vec<Move>,
    ) {
        for &to in targets {
            let piece = self.get(to);
            if piece.is_empty() || piece.is_enemy_of(color) {
                self.push_if_safe(color, Move::new(from, to), moves);
            }
        }
    }

    fn slider_moves(
        &mut self,
        from: Location,
        color: Color,
        directions: &[Offset],
        moves: &mut Vec<Move>,
    ) {
        for &direction in directions {
            let mut cursor = from.offset(direction);
            while let Some(to) = cursor {
                let piece = self.get(to);
                if piece.is_empty() || piece.is_enemy_of(color) {
                    self.push_if_safe(color, Move::new(from, to), moves);
                }
                // The walk along this direction ends at the first occupied
                // square, own or enemy.
                if !piece.is_empty() {
                    break;
                }
                cursor = to.offset(direction);
            }
        }
    }

    /// Keep a candidate only if it leaves the mover's own king safe.
    ///
    /// `color` is the color of the piece being moved, taken from the
    /// square itself rather than any cached side-to-move field.
    fn push_if_safe(&mut self, color: Color, mv: Move, moves: &mut Vec<Move>) {
        if !self.in_check_after_move(color, mv) {
            moves.push(mv);
        }
    }
}
