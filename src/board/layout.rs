//! Fixed board geometry.
//!
//! ```text
//!   ____                                   ____
//!  | P2 |  (12) (11) (10) (09) (08) (07)  | P1 |
//!  |(13)|                                 |(06)|
//!  |____|  (00) (01) (02) (03) (04) (05)  |____|
//! ```
//!
//! Sowing runs counter-clockwise through increasing indices, wrapping from
//! 13 back to 0.

use std::ops::RangeInclusive;

/// Number of positions on the board (12 pits + 2 stores).
pub const POSITION_COUNT: usize = 14;

/// Pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Marbles in every pit at the start of a game.
pub const SEEDS_PER_PIT: usize = 4;

/// Marbles on a fresh board.
pub const TOTAL_SEEDS: usize = SEEDS_PER_PIT * PITS_PER_SIDE * 2;

/// Player One's store.
pub const P1_STORE: usize = 6;

/// Player Two's store.
pub const P2_STORE: usize = 13;

/// Player One's pits.
pub const P1_PITS: RangeInclusive<usize> = 0..=5;

/// Player Two's pits.
pub const P2_PITS: RangeInclusive<usize> = 7..=12;

/// Every pit on the board, Player One's side first.
pub const ALL_PITS: [usize; 12] = [0, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12];

/// Check if `index` is one of the two stores.
#[must_use]
pub const fn is_store(index: usize) -> bool {
    index == P1_STORE || index == P2_STORE
}

/// Check if `index` is one of the twelve pits.
#[must_use]
pub const fn is_pit(index: usize) -> bool {
    index < POSITION_COUNT && !is_store(index)
}

/// The pit directly across the board, `|12 - index|`.
///
/// Only meaningful for pit indices; pit 0 faces 12, pit 5 faces 7.
#[must_use]
pub const fn opposite_pit(index: usize) -> usize {
    12usize.abs_diff(index)
}
