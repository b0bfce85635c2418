//! Change notifications.
//!
//! Every engine mutation appends a [`GameEvent`] to the engine's journal. A UI
//! layer drains the journal after each action and animates the changes. While
//! an action is running, a pacer sees the pending events through
//! [`crate::pacing::Frame::events`]. The engine itself never depends on who is
//! watching.

use serde::{Deserialize, Serialize};

use crate::core::{MarbleColor, Player};
use crate::rules::GameResult;

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh board was dealt.
    Reset,
    /// The game moved from `NotStarted` to `InProgress`.
    Started,
    /// The pacing delay changed.
    DelayChanged { ms: u64 },
    /// A pit was emptied into the mover's hand.
    Picked { pit: usize, count: usize },
    /// One marble was dropped on a position.
    Placed { position: usize, color: MarbleColor },
    /// Marbles were added to a player's store.
    Banked { player: Player, count: usize },
    /// A pit was emptied after banking.
    PitCleared { pit: usize },
    /// The turn passed to `next`.
    TurnPassed { next: Player },
    /// The game ended.
    GameOver { result: GameResult },
}

/// Ordered record of events since the last drain.
#[derive(Clone, Debug, Default)]
pub struct EventJournal {
    events: Vec<GameEvent>,
}

impl EventJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every pending event.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forget every pending event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
