//! Check detection.

use crate::game::offsets::{king_targets, knight_targets, QUEEN_DIRECTIONS};
use crate::game::types::{Color, Move, Offset, Piece, PieceKind};
use crate::game::Position;

impl Position {
    /// Is `color`'s king currently attacked?
    ///
    /// Tests the four attack patterns in order, short-circuiting on the
    /// first hit: knight offsets, enemy pawn diagonals, enemy king
    /// adjacency, then the eight sliding rays.
    pub(crate) fn in_check(&self, color: Color) -> bool {
        let king = self.king_location(color);
        let enemy = color.opponent();

        for &loc in knight_targets(king) {
            if self.get(loc) == Piece::Occupied(enemy, PieceKind::Knight) {
                return true;
            }
        }

        // An enemy pawn attacks from one rank on its own side of the king.
        let pawn_rank_delta = -enemy.pawn_direction();
        for file_delta in [-1, 1] {
            if let Some(loc) = king.offset(Offset(file_delta, pawn_rank_delta)) {
                if self.get(loc) == Piece::Occupied(enemy, PieceKind::Pawn) {
                    return true;
                }
            }
        }

        for &loc in king_targets(king) {
            if self.get(loc) == Piece::Occupied(enemy, PieceKind::King) {
                return true;
            }
        }

        // Along each ray the first occupied square decides: an enemy
        // slider compatible with the ray's orientation gives check, any
        // other piece blocks.
        for &direction in QUEEN_DIRECTIONS.iter() {
            let mut cursor = king.offset(direction);
            while let Some(loc) = cursor {
                match self.get(loc) {
                    Piece::Empty => cursor = loc.offset(direction),
                    Piece::Occupied(owner, kind) => {
                        if owner == enemy && ray_attacks(kind, direction) {
                            return true;
                        }
                        break;
                    }
                }
            }
        }

        false
    }

    /// Would playing `mv` leave `color`'s king attacked?
    ///
    /// Applies the move transiently and undoes it before returning; used
    /// only by the move generator's legality filter.
    pub(crate) fn in_check_after_move(&mut self, color: Color, mv: Move) -> bool {
        let captured = self.apply_move(mv);
        let in_check = self.in_check(color);
        self.undo_move(mv, captured);
        in_check
    }
}

fn ray_attacks(kind: PieceKind, direction: Offset) -> bool {
    if direction.is_orthogonal() {
        kind.attacks_straight()
    } else {
        kind.attacks_diagonally()
    }
}
