//! # mancala-engine
//!
//! Rules engine for Mancala, Kalah variant: 6 pits per side, 4 marbles per
//! pit, one store per player.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `KalahGame` owns the board. Every mutation goes
//!    through pick/place/bank/clear and runs to completion before returning.
//!
//! 2. **Observable, Not Reactive**: The engine is plain data. A UI reads the
//!    accessors or a `snapshot`, and drains `GameEvent`s to animate changes.
//!
//! 3. **Injectable Pacing**: Pauses between placements go through a `Pacer`,
//!    which is a no-op by default. Pacing never changes outcomes.
//!
//! 4. **Deterministic**: The same seed deals the same colours and plays the
//!    same auto-play game.
//!
//! ## Modules
//!
//! - `core`: Players, marble colours, lifecycle state, RNG, configuration
//! - `board`: Board geometry and the marble container
//! - `rules`: `RulesEngine` trait, game results, turn outcomes
//! - `games`: The Kalah engine
//! - `pacing`: Suspension hooks between animation steps
//! - `events`: Change notifications
//! - `policy`: Move selection for automated play
//! - `preferences`: Persisted UI settings

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod pacing;
pub mod events;
pub mod policy;
pub mod preferences;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameState, MarbleColor, Player};

pub use crate::board::{opposite_pit, Board, Pit, P1_STORE, P2_STORE};

pub use crate::rules::{GameResult, RulesEngine, TurnOutcome};

pub use crate::games::kalah::{EngineSnapshot, KalahGame, KalahGameBuilder};

pub use crate::pacing::{Frame, NoDelay, Pacer, ThreadSleep};

pub use crate::events::{EventJournal, GameEvent};

pub use crate::policy::{MovePolicy, UniformRandom};

pub use crate::preferences::{Preferences, PreferencesError};
