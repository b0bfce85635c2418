//! Rules engine trait and game results.

pub mod engine;

pub use engine::{GameResult, RulesEngine, TurnOutcome};
