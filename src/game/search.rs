//! Automated move selection: alpha-beta minimax over the memoized
//! position tree with a selective depth-extension rule.
//!
//! The search is synchronous and runs to completion; every node it visits
//! stays memoized in its parent's child slots. Depth extension is keyed
//! off child index, not move quality: with `mod = max(len / 10, 1)`,
//! child `i` recurses at `depth + 1` when `i % mod == 0` and at
//! `depth + 3` otherwise, truncating roughly nine in ten branches two
//! plies early.

use rand::Rng;

use crate::game::types::Color;
use crate::game::Position;

/// Nominal search depth cap in plies.
pub(crate) const MAX_DEPTH: u32 = 4;

/// Divisor base for the index-modulo depth extension rule.
const MAX_DEPTH_CHILDREN: usize = 10;

const INFINITY: i32 = 1_000_000;

impl Position {
    /// Pick a move for the side to move and return the resulting position.
    ///
    /// When several root moves tie on search value, one is chosen
    /// uniformly with the supplied RNG; seed it for deterministic play.
    /// With no legal moves (checkmate or stalemate) the position is
    /// returned unchanged.
    #[must_use]
    pub fn choose_automated_move<R: Rng + ?Sized>(mut self, rng: &mut R) -> Position {
        if self.legal_moves.is_empty() {
            return self;
        }

        let perspective = self.side_to_move();
        let mut best_value = -INFINITY;
        let mut best_indices: Vec<usize> = Vec::new();
        for index in 0..self.legal_moves.len() {
            let value = self
                .child(index)
                .min_value(perspective, 2, -INFINITY, INFINITY);
            if best_indices.is_empty() || value > best_value {
                best_indices.clear();
                best_indices.push(index);
                best_value = value;
            } else if value == best_value {
                best_indices.push(index);
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "root search for {perspective}: {} moves, best value {best_value}, {} tied",
            self.legal_moves.len(),
            best_indices.len()
        );

        let index = best_indices[rng.gen_range(0..best_indices.len())];
        self.take_child(index)
    }

    /// Best achievable value for `perspective` when it is to move here.
    pub(crate) fn max_value(
        &mut self,
        perspective: Color,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth >= MAX_DEPTH || self.legal_moves.is_empty() {
            return self.score * perspective.sign();
        }

        let mut best = -INFINITY;
        let step_mod = (self.legal_moves.len() / MAX_DEPTH_CHILDREN).max(1);
        for index in 0..self.legal_moves.len() {
            let step = if index % step_mod == 0 { 1 } else { 3 };
            let value = self
                .child(index)
                .min_value(perspective, depth + step, alpha, beta);
            best = best.max(value);
            if best > beta {
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    }

    /// Best achievable value for `perspective` when its opponent moves here.
    pub(crate) fn min_value(
        &mut self,
        perspective: Color,
        depth: u32,
        alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth >= MAX_DEPTH || self.legal_moves.is_empty() {
            return self.score * perspective.sign();
        }

        let mut best = INFINITY;
        let step_mod = (self.legal_moves.len() / MAX_DEPTH_CHILDREN).max(1);
        for index in 0..self.legal_moves.len() {
            let step = if index % step_mod == 0 { 1 } else { 3 };
            let value = self
                .child(index)
                .max_value(perspective, depth + step, alpha, beta);
            best = best.min(value);
            if best < alpha {
                return best;
            }
            beta = beta.min(best);
        }
        best
    }
}
