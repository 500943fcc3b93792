//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::game::{Color, Move, Piece, Position};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: apply_move followed by undo_move restores the grid and
    /// king caches exactly, at any reachable position.
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_grid = position.grid;
        let initial_kings = (position.white_king, position.black_king);

        let mut color = Color::White;
        let mut history: Vec<(Move, Piece)> = Vec::new();
        for _ in 0..num_moves {
            let moves = position.legal_moves_for(color);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            history.push((mv, position.apply_move(mv)));
            color = color.opponent();
        }

        while let Some((mv, captured)) = history.pop() {
            position.undo_move(mv, captured);
        }

        prop_assert_eq!(position.grid, initial_grid);
        prop_assert_eq!((position.white_king, position.black_king), initial_kings);
    }

    /// Property: no legal move ever leaves the mover's own king in check.
    #[test]
    fn prop_legal_moves_keep_own_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if position.legal_moves.is_empty() {
                break;
            }
            for &mv in &position.legal_moves {
                let mover = position.side_to_move();
                let mut probe = position.clone();
                let captured = probe.apply_move(mv);
                prop_assert!(!probe.in_check(mover), "move {} left {} in check", mv, mover);
                probe.undo_move(mv, captured);
            }
            let index = rng.gen_range(0..position.legal_moves.len());
            let mv = position.legal_moves[index];
            position = position.attempt_move(mv);
        }
    }

    /// Property: move generation is deterministic on an unmodified position.
    #[test]
    fn prop_generation_order_is_stable(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side = position.side_to_move();
            let first = position.legal_moves_for(side);
            let second = position.legal_moves_for(side);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first, &position.legal_moves);

            if first.is_empty() {
                break;
            }
            let mv = first[rng.gen_range(0..first.len())];
            position = position.attempt_move(mv);
        }
    }

    /// Property: the king caches always point at the actual kings.
    #[test]
    fn prop_king_caches_track_the_grid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            prop_assert_eq!(
                position.get(position.white_king),
                Piece::Occupied(Color::White, crate::game::PieceKind::King)
            );
            prop_assert_eq!(
                position.get(position.black_king),
                Piece::Occupied(Color::Black, crate::game::PieceKind::King)
            );

            if position.legal_moves.is_empty() {
                break;
            }
            let index = rng.gen_range(0..position.legal_moves.len());
            let mv = position.legal_moves[index];
            position = position.attempt_move(mv);
        }
    }
}
