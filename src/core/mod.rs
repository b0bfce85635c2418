//! Core engine types: players, marbles, lifecycle state, RNG, configuration.

pub mod player;
pub mod marble;
pub mod rng;
pub mod config;
pub mod state;

pub use player::Player;
pub use marble::MarbleColor;
pub use rng::GameRng;
pub use config::{is_valid_delay, EngineConfig, AUTOPLAY_DELAY_MS, MAX_AUTOPLAY_TURNS, MAX_DELAY_MS};
pub use state::GameState;
