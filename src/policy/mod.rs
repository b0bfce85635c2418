//! Move selection policies for automated play.

use crate::core::GameRng;

/// Chooses one of the currently legal spaces.
pub trait MovePolicy {
    /// Pick a space from `spaces`, or `None` to stop.
    fn choose_space(&mut self, spaces: &[usize]) -> Option<usize>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal spaces.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    /// Create a policy drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a policy from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl MovePolicy for UniformRandom {
    fn choose_space(&mut self, spaces: &[usize]) -> Option<usize> {
        self.rng.choose(spaces).copied()
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for &mut P {
    fn choose_space(&mut self, spaces: &[usize]) -> Option<usize> {
        (**self).choose_space(spaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_picks_legal_space() {
        let mut policy = UniformRandom::from_seed(42);
        let spaces = [0, 3, 5];

        for _ in 0..100 {
            let space = policy.choose_space(&spaces).unwrap();
            assert!(spaces.contains(&space), "space {} is not legal", space);
        }
    }

    #[test]
    fn test_uniform_empty_returns_none() {
        let mut policy = UniformRandom::from_seed(42);
        assert_eq!(policy.choose_space(&[]), None);
    }

    #[test]
    fn test_uniform_reaches_every_space() {
        let mut policy = UniformRandom::from_seed(7);
        let spaces = [7, 8, 9, 10, 11, 12];
        let mut hits = [0usize; 6];

        for _ in 0..600 {
            let space = policy.choose_space(&spaces).unwrap();
            hits[space - 7] += 1;
        }

        assert!(hits.iter().all(|&h| h > 0));
    }

    #[test]
    fn test_uniform_is_deterministic() {
        let mut a = UniformRandom::from_seed(9);
        let mut b = UniformRandom::from_seed(9);
        let spaces = [0, 1, 2, 3, 4, 5];

        for _ in 0..20 {
            assert_eq!(a.choose_space(&spaces), b.choose_space(&spaces));
        }
    }
}
