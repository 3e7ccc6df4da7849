//! Randomness source for battle draws.
//!
//! The engine draws exactly one value per battle. Production code plugs in an
//! entropy-backed source; tests plug in a fixed value or the seeded
//! [`PcgRandom`] to replay a sequence of battles.

use core::sync::atomic::{AtomicU64, Ordering};

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw the next value. Must lie in `[0, 1)`.
    fn next_unit_float(&self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for std::sync::Arc<T> {
    fn next_unit_float(&self) -> f64 {
        (**self).next_unit_float()
    }
}

/// Seeded PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
/// The state is advanced atomically so a shared reference is enough to draw.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Debug, Default)]
pub struct PcgRandom {
    state: AtomicU64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^32, the size of the output range.
    const OUTPUT_RANGE: f64 = 4_294_967_296.0;

    pub fn new(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: xorshift high bits, then rotate by the top five bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Advance the shared state and return the next 32-bit output.
    pub fn next_u32(&self) -> u32 {
        let previous = self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
                Some(Self::pcg_step(s))
            })
            .unwrap_or_else(|current| current);
        Self::pcg_output(Self::pcg_step(previous))
    }
}

impl RandomSource for PcgRandom {
    fn next_unit_float(&self) -> f64 {
        f64::from(self.next_u32()) / Self::OUTPUT_RANGE
    }
}
