//! Rules engine trait for turn-based play.
//!
//! An engine implements `RulesEngine` to expose:
//! - Which spaces the active player may pick
//! - How picking a space changes the board
//! - When the game is over and who won
//!
//! Drivers (auto-play, the CLI, benchmarks) only talk to this trait.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::policy::MovePolicy;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has strictly more marbles in their store.
    Winner(Player),
    /// Both stores hold the same number of marbles.
    Tie,
}

impl GameResult {
    /// Decide a result from the two store sizes.
    #[must_use]
    pub fn from_scores(p1: usize, p2: usize) -> Self {
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

/// What a single `take_turn` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The space was not legal. Nothing changed.
    Rejected,
    /// The last marble landed on a non-empty pit; the same player must
    /// continue from `position`.
    Relay { position: usize },
    /// The last marble landed in the mover's own store.
    ExtraTurn,
    /// The turn ended. `captured` marbles were banked by a capture.
    Passed { captured: usize },
    /// The move emptied a side and finished the game.
    GameOver(GameResult),
}

impl TurnOutcome {
    /// Check if the move was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_spaces`: Return empty if nothing can be picked
/// - `apply_space`: Must ignore illegal spaces and stay deterministic
/// - `is_terminal`: Return None while the game continues
pub trait RulesEngine {
    /// Player whose move it is.
    fn active_player(&self) -> Player;

    /// Spaces the active player may pick right now.
    fn legal_spaces(&self) -> Vec<usize>;

    /// Pick a space and resolve the move.
    fn apply_space(&mut self, space: usize) -> TurnOutcome;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Let `policy` pick spaces until the game ends, no space is legal, or
    /// `max_turns` picks have been made.
    ///
    /// Returns the number of picks made.
    fn play_out<P: MovePolicy + ?Sized>(&mut self, policy: &mut P, max_turns: usize) -> usize
    where
        Self: Sized,
    {
        let mut turns = 0;

        while turns < max_turns && self.is_terminal().is_none() {
            let spaces = self.legal_spaces();
            let Some(space) = policy.choose_space(&spaces) else {
                break;
            };
            self.apply_space(space);
            turns += 1;
        }

        turns
    }
}
