//! Game lifecycle state.
//!
//! ```text
//! NotStarted --start--> InProgress <--> PlacingMarbles --> ... --> Done
//!      ^                                                            |
//!      +--------------------------- reset --------------------------+
//! ```

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Fresh board, no move made yet.
    #[default]
    NotStarted,
    /// Waiting for the active player's next pick.
    InProgress,
    /// A distribution is running.
    PlacingMarbles,
    /// One side ran out of marbles. Terminal until reset.
    Done,
}

impl GameState {
    /// Check if the game has finished.
    #[must_use]
    pub fn is_done(self) -> bool {
        self == GameState::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(GameState::default(), GameState::NotStarted);
    }

    #[test]
    fn test_is_done() {
        assert!(GameState::Done.is_done());
        assert!(!GameState::InProgress.is_done());
        assert!(!GameState::PlacingMarbles.is_done());
        assert!(!GameState::NotStarted.is_done());
    }
}
