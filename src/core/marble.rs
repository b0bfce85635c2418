//! Marble (seed) colours.
//!
//! Colour has no effect on the rules. It only gives each marble an identity
//! for display, so a UI can follow a marble as it moves across the board.

use serde::{Deserialize, Serialize};

use super::GameRng;

/// Colour of a single marble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarbleColor {
    Red,
    Blue,
    Green,
    Purple,
}

impl MarbleColor {
    /// Every colour, in declaration order.
    pub const ALL: [MarbleColor; 4] = [
        MarbleColor::Red,
        MarbleColor::Blue,
        MarbleColor::Green,
        MarbleColor::Purple,
    ];

    /// Draw a colour uniformly at random.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Single-letter tag used by the text board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            MarbleColor::Red => 'R',
            MarbleColor::Blue => 'B',
            MarbleColor::Green => 'G',
            MarbleColor::Purple => 'P',
        }
    }
}

impl std::fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarbleColor::Red => "red",
            MarbleColor::Blue => "blue",
            MarbleColor::Green => "green",
            MarbleColor::Purple => "purple",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_covers_all_colours() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let colour = MarbleColor::random(&mut rng);
            let idx = MarbleColor::ALL.iter().position(|&c| c == colour).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = MarbleColor::ALL.iter().map(|c| c.symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
