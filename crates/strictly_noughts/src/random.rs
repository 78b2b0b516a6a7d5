//! Injectable source of randomness for the move engine.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Draws used by the move engine.
///
/// Implementations must return `pick(len)` in `0..len` (with `len > 0`)
/// and `percent()` in `0..=100`.
pub trait RandomSource {
    /// Uniform choice of a position in a candidate list of length `len`.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `0..=100`.
    fn percent(&mut self) -> u32;
}

impl RandomSource for StdRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn percent(&mut self) -> u32 {
        self.random_range(0..=100)
    }
}

impl RandomSource for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn percent(&mut self) -> u32 {
        self.random_range(0..=100)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn percent(&mut self) -> u32 {
        (**self).percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
        for _ in 0..500 {
            assert!(rng.percent() <= 100);
        }
    }
}
