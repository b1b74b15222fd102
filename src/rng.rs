//! Random number generation for board setup.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++): fast, seedable for
//! deterministic replay in tests, OS entropy by default.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable RNG for mine placement.
pub struct BoardRng {
    inner: SmallRng,
}

impl BoardRng {
    /// Create from OS entropy.
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in [0, max).
    #[inline(always)]
    pub fn gen_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }
}

impl Default for BoardRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deterministic() {
        let mut rng1 = BoardRng::from_seed(42);
        let mut rng2 = BoardRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(rng1.gen_range(1000), rng2.gen_range(1000));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = BoardRng::from_seed(123);
        for _ in 0..1000 {
            assert!(rng.gen_range(10) < 10);
        }
    }
}
