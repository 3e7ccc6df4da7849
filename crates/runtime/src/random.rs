//! Production randomness source.

use arena_core::RandomSource;
use rand::Rng;

/// Draws from the thread-local, OS-seeded generator.
///
/// Use [`arena_core::PcgRandom`] instead when battles must be replayable.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit_float(&self) -> f64 {
        // Standard distribution for f64 samples [0, 1).
        rand::thread_rng().r#gen::<f64>()
    }
}
