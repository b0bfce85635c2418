//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Largest accepted engine delay, in milliseconds.
///
/// Independent of the UI preference bounds in [`crate::preferences`].
pub const MAX_DELAY_MS: u64 = 3000;

/// Delay applied when auto-play starts.
pub const AUTOPLAY_DELAY_MS: u64 = 100;

/// Upper bound on `take_turn` calls made by a single auto-play run.
pub const MAX_AUTOPLAY_TURNS: usize = 10_000;

/// Check if a delay lies inside the engine's accepted range.
#[must_use]
pub fn is_valid_delay(ms: u64) -> bool {
    ms <= MAX_DELAY_MS
}

/// Engine construction parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. `None` draws one from system entropy.
    pub seed: Option<u64>,

    /// Initial pacing delay in milliseconds, restored on reset.
    /// Out-of-range values fall back to 0.
    pub delay_ms: u64,
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom initial delay.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// The initial delay, or 0 when the configured value is out of range.
    #[must_use]
    pub fn initial_delay(&self) -> u64 {
        if is_valid_delay(self.delay_ms) {
            self.delay_ms
        } else {
            0
        }
    }
}
