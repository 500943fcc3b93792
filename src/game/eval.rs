//! Static evaluation: material balance plus a checkmate bonus.

use crate::game::types::Color;
use crate::game::Position;

/// Bonus added on top of material when the side to move has no legal
/// moves, signed toward the color that delivered it.
pub(crate) const CHECKMATE_VALUE: i32 = 100;

impl Position {
    /// Signed score where positive favors White.
    ///
    /// Only the move list is consulted for the bonus, so stalemate is
    /// priced exactly like checkmate rather than as a draw.
    pub(crate) fn evaluate(&self) -> i32 {
        let mut value = 0;
        for rank in &self.grid {
            for piece in rank {
                value += piece.value();
            }
        }
        if self.legal_moves.is_empty() {
            value += match self.mover {
                Color::White => CHECKMATE_VALUE,
                Color::Black => -CHECKMATE_VALUE,
            };
        }
        value
    }
}
