//! Mancala, Kalah variant: six pits and one store per player, four marbles
//! per pit.
//!
//! Rules as implemented here:
//! - Sowing runs counter-clockwise and skips the opponent's store
//! - Ending in your own store keeps the turn
//! - Ending on a non-empty pit (either side) is a relay: pick it up and keep
//!   sowing
//! - Ending alone in one of your own pits captures it together with the pit
//!   across the board, then the turn passes
//! - Ending alone on the opponent's side just passes the turn
//! - When either side is empty, both sides are swept into their owners'
//!   stores and the bigger store wins

mod builder;
mod game;

pub use builder::KalahGameBuilder;
pub use game::{EngineSnapshot, KalahGame};
