use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CellCount;

/// Source of uniformly distributed numbers used by mine placement.
///
/// Any [`rand::Rng`] is a source; tests can substitute a scripted implementation to replay a fixed draw
/// sequence.
pub trait RandomSource {
    /// Draws from the closed interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn next_int(&mut self, min: CellCount, max: CellCount) -> CellCount;

    /// Draws from `[0, 1)`.
    fn next_float(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, min: CellCount, max: CellCount) -> CellCount {
        assert!(min <= max, "empty draw range [{min}, {max}]");
        self.random_range(min..=max)
    }

    fn next_float(&mut self) -> f32 {
        self.random()
    }
}

/// Reproducible generator: the same seed always yields the same draws.
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
