//! Uniform random number service
//!
//! Every stochastic decision in the engine goes through [`UniformRng`], so the
//! whole simulation can be replayed from a single seed. Sampling is a discrete
//! uniform draw over an inclusive integer range; the rounded-continuous form
//! (`round(uniform(0,1) * max)`) was rejected because it halves the probability
//! mass at both endpoints.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source backing the simulation
///
/// Thread-unsafe by design: exactly one simulation thread owns it.
pub struct UniformRng {
    rng: ChaCha8Rng,
}

impl UniformRng {
    /// Seed from system entropy (the default for live runs)
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seed deterministically, for tests and reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in the **inclusive** range `[0, max]`
    ///
    /// Exactly uniform at the endpoints.
    pub fn next_in(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..=max)
    }

    /// Raw 64-bit draw, used to derive seeds for sub-generators
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_in_stays_inclusive() {
        let mut rng = UniformRng::seeded(1);
        let mut saw_zero = false;
        let mut saw_max = false;
        for _ in 0..1000 {
            let v = rng.next_in(3);
            assert!(v <= 3);
            saw_zero |= v == 0;
            saw_max |= v == 3;
        }
        assert!(saw_zero, "endpoint 0 never drawn in 1000 samples");
        assert!(saw_max, "endpoint 3 never drawn in 1000 samples");
    }

    #[test]
    fn test_next_in_zero_max() {
        let mut rng = UniformRng::seeded(2);
        for _ in 0..10 {
            assert_eq!(rng.next_in(0), 0);
        }
    }

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = UniformRng::seeded(42);
        let mut b = UniformRng::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_in(999), b.next_in(999));
        }
    }
}
