//! Player identification.
//!
//! Kalah is strictly two-player, so `Player` is a closed enum rather than an
//! index. Each player owns six pits and one store on the board; the helpers
//! here map a player to the positions it owns.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::board::{P1_PITS, P1_STORE, P2_PITS, P2_STORE};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Owns pits 0-5 and store 6. Moves first.
    One,
    /// Owns pits 7-12 and store 13.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => P1_STORE,
            Player::Two => P2_STORE,
        }
    }

    /// Board indices of this player's six pits.
    #[must_use]
    pub const fn pits(self) -> RangeInclusive<usize> {
        match self {
            Player::One => P1_PITS,
            Player::Two => P2_PITS,
        }
    }

    /// Check if `index` is one of this player's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pits().contains(&index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}
