//! Direction tables and precomputed leaper target squares.
//!
//! Table order is load-bearing: legal move lists follow these orders, and
//! the search's depth-extension rule selects children by list index.

use once_cell::sync::Lazy;

use crate::game::types::{Location, Offset};

pub(crate) const ROOK_DIRECTIONS: [Offset; 4] = [
    Offset(0, -1),
    Offset(0, 1),
    Offset(1, 0),
    Offset(-1, 0),
];

pub(crate) const BISHOP_DIRECTIONS: [Offset; 4] = [
    Offset(-1, -1),
    Offset(1, -1),
    Offset(1, 1),
    Offset(-1, 1),
];

pub(crate) const QUEEN_DIRECTIONS: [Offset; 8] = [
    Offset(-1, -1),
    Offset(1, -1),
    Offset(1, 1),
    Offset(-1, 1),
    Offset(0, -1),
    Offset(0, 1),
    Offset(1, 0),
    Offset(-1, 0),
];

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset(-2, -1),
    Offset(-2, 1),
    Offset(-1, -2),
    Offset(-1, 2),
    Offset(2, -1),
    Offset(2, 1),
    Offset(1, -2),
    Offset(1, 2),
];

// The king steps one square along any queen direction.
const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

static KNIGHT_TARGETS: Lazy<[Vec<Location>; 64]> = Lazy::new(|| targets_table(&KNIGHT_OFFSETS));

static KING_TARGETS: Lazy<[Vec<Location>; 64]> = Lazy::new(|| targets_table(&KING_OFFSETS));

fn targets_table(offsets: &[Offset; 8]) -> [Vec<Location>; 64] {
    std::array::from_fn(|index| {
        let from = Location(index % 8, index / 8);
        offsets.iter().filter_map(|&delta| from.offset(delta)).collect()
    })
}

/// On-board knight destinations from a square, in fixed offset order.
#[inline]
pub(crate) fn knight_targets(from: Location) -> &'static [Location] {
    &KNIGHT_TARGETS[from.as_index()]
}

/// On-board king destinations from a square, in fixed offset order.
#[inline]
pub(crate) fn king_targets(from: Location) -> &'static [Location] {
    &KING_TARGETS[from.as_index()]
}
