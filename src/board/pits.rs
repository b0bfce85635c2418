//! Board container: fourteen positions, each holding a pile of marbles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::{is_pit, ALL_PITS, POSITION_COUNT, SEEDS_PER_PIT};
use crate::core::{GameRng, MarbleColor, Player};

/// Marbles held by one position.
///
/// Order carries no game meaning; it is kept so display stays stable.
pub type Pit = SmallVec<[MarbleColor; 8]>;

/// The fourteen positions of a Kalah board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    positions: [Pit; POSITION_COUNT],
}

impl Board {
    /// Create a board with every position empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            positions: std::array::from_fn(|_| Pit::new()),
        }
    }

    /// Create a starting board: four random-coloured marbles per pit,
    /// both stores empty.
    pub fn new_random(rng: &mut GameRng) -> Self {
        let mut board = Self::empty();
        for pit in ALL_PITS {
            board.positions[pit] = (0..SEEDS_PER_PIT)
                .map(|_| MarbleColor::random(rng))
                .collect();
        }
        board
    }

    /// Create a board from per-position marble counts, every marble `colour`.
    #[must_use]
    pub fn from_counts(counts: [usize; POSITION_COUNT], colour: MarbleColor) -> Self {
        Self {
            positions: counts.map(|n| std::iter::repeat(colour).take(n).collect()),
        }
    }

    /// Marbles at any position, stores included. Out-of-range is empty.
    #[must_use]
    pub fn position(&self, index: usize) -> &[MarbleColor] {
        self.positions.get(index).map_or(&[], |p| p.as_slice())
    }

    /// Marbles in a pit. Stores and out-of-range indices are empty.
    #[must_use]
    pub fn pit(&self, index: usize) -> &[MarbleColor] {
        if is_pit(index) {
            &self.positions[index]
        } else {
            &[]
        }
    }

    /// Marble count at a position.
    #[must_use]
    pub fn count(&self, index: usize) -> usize {
        self.position(index).len()
    }

    /// A player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> &[MarbleColor] {
        &self.positions[player.store()]
    }

    /// Check if all of a player's pits are empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        player.pits().all(|i| self.positions[i].is_empty())
    }

    /// Marbles across every position.
    #[must_use]
    pub fn total_marbles(&self) -> usize {
        self.positions.iter().map(|p| p.len()).sum()
    }

    /// Replace the contents of a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board position.
    pub fn set(&mut self, index: usize, marbles: impl IntoIterator<Item = MarbleColor>) {
        self.positions[index] = marbles.into_iter().collect();
    }

    /// Remove and return everything at a position.
    pub(crate) fn take(&mut self, index: usize) -> Pit {
        std::mem::take(&mut self.positions[index])
    }

    /// Drop a single marble onto a position.
    pub(crate) fn push(&mut self, index: usize, marble: MarbleColor) {
        self.positions[index].push(marble);
    }

    /// Add marbles to a position.
    pub(crate) fn extend(&mut self, index: usize, marbles: impl IntoIterator<Item = MarbleColor>) {
        self.positions[index].extend(marbles);
    }

    /// Empty a position, discarding its marbles.
    pub(crate) fn clear(&mut self, index: usize) {
        self.positions[index].clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    /// Marble counts laid out as seen from Player One's side.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |pits: &mut dyn Iterator<Item = usize>| {
            pits.map(|i| format!("{:>3}", self.count(i)))
                .collect::<Vec<_>>()
                .join(" ")
        };

        writeln!(f, "      {}", row(&mut (7..=12).rev()))?;
        writeln!(
            f,
            "{:>3} {:>25} {:>3}",
            self.count(Player::Two.store()),
            "",
            self.count(Player::One.store())
        )?;
        write!(f, "      {}", row(&mut (0..=5)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::{P1_STORE, P2_STORE, TOTAL_SEEDS};

    #[test]
    fn test_new_random_layout() {
        let mut rng = GameRng::new(42);
        let board = Board::new_random(&mut rng);

        for pit in ALL_PITS {
            assert_eq!(board.count(pit), SEEDS_PER_PIT);
        }
        assert!(board.store(Player::One).is_empty());
        assert!(board.store(Player::Two).is_empty());
        assert_eq!(board.total_marbles(), TOTAL_SEEDS);
    }

    #[test]
    fn test_same_seed_same_colours() {
        let a = Board::new_random(&mut GameRng::new(5));
        let b = Board::new_random(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pit_hides_stores_and_out_of_range() {
        let board = Board::from_counts([1; POSITION_COUNT], MarbleColor::Red);
        assert!(board.pit(P1_STORE).is_empty());
        assert!(board.pit(P2_STORE).is_empty());
        assert!(board.pit(15).is_empty());
        assert_eq!(board.pit(3).len(), 1);

        // Raw access still sees the stores
        assert_eq!(board.position(P1_STORE).len(), 1);
        assert!(board.position(99).is_empty());
    }

    #[test]
    fn test_side_is_empty() {
        let mut counts = [0; POSITION_COUNT];
        counts[9] = 2;
        counts[P1_STORE] = 5;
        let board = Board::from_counts(counts, MarbleColor::Blue);

        assert!(board.side_is_empty(Player::One));
        assert!(!board.side_is_empty(Player::Two));
    }

    #[test]
    fn test_take_and_extend_conserve() {
        let mut board = Board::new_random(&mut GameRng::new(1));
        let taken = board.take(2);
        assert_eq!(taken.len(), SEEDS_PER_PIT);
        assert_eq!(board.count(2), 0);

        board.extend(P1_STORE, taken);
        assert_eq!(board.count(P1_STORE), SEEDS_PER_PIT);
        assert_eq!(board.total_marbles(), TOTAL_SEEDS);
    }

    #[test]
    fn test_display() {
        let board = Board::new_random(&mut GameRng::new(1));
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('4'));
        assert!(lines[1].trim_start().starts_with('0'));
    }

    #[test]
    fn test_serialization() {
        let board = Board::new_random(&mut GameRng::new(11));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
