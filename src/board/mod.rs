//! The Kalah board: geometry constants and the marble container.

pub mod layout;
pub mod pits;

pub use layout::{
    is_pit, is_store, opposite_pit, ALL_PITS, P1_PITS, P1_STORE, P2_PITS, P2_STORE,
    PITS_PER_SIDE, POSITION_COUNT, SEEDS_PER_PIT, TOTAL_SEEDS,
};
pub use pits::{Board, Pit};
