//! Traits describing the engine's external collaborators.
//!
//! The engine never reaches for ambient randomness or storage. A
//! [`RandomSource`] and a [`StatsRecorder`] are bundled into an [`Env`] and
//! passed to [`BattleEngine::resolve_battle`](crate::engine::BattleEngine::resolve_battle),
//! so the decision rule can be driven by deterministic stubs in tests.
mod error;
mod rng;
mod stats;

pub use error::EnvError;
pub use rng::{PcgRandom, RandomSource};
pub use stats::{Outcome, StatsError, StatsRecorder};

/// Aggregates the collaborators required to resolve a battle.
pub struct Env<'a, R, S>
where
    R: RandomSource + ?Sized,
    S: StatsRecorder + ?Sized,
{
    rng: Option<&'a R>,
    stats: Option<&'a S>,
}

pub type BattleEnv<'a> = Env<'a, dyn RandomSource + 'a, dyn StatsRecorder + 'a>;

impl<R, S> Clone for Env<'_, R, S>
where
    R: RandomSource + ?Sized,
    S: StatsRecorder + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, S> Copy for Env<'_, R, S>
where
    R: RandomSource + ?Sized,
    S: StatsRecorder + ?Sized,
{
}

impl<'a, R, S> Env<'a, R, S>
where
    R: RandomSource + ?Sized,
    S: StatsRecorder + ?Sized,
{
    pub fn new(rng: Option<&'a R>, stats: Option<&'a S>) -> Self {
        Self { rng, stats }
    }

    pub fn with_all(rng: &'a R, stats: &'a S) -> Self {
        Self::new(Some(rng), Some(stats))
    }

    pub fn empty() -> Self {
        Self {
            rng: None,
            stats: None,
        }
    }

    /// Returns the RandomSource, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::RandomNotAvailable` if no randomness source was provided.
    pub fn rng(&self) -> Result<&'a R, EnvError> {
        self.rng.ok_or(EnvError::RandomNotAvailable)
    }

    /// Returns the StatsRecorder, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::StatsNotAvailable` if no stats recorder was provided.
    pub fn stats(&self) -> Result<&'a S, EnvError> {
        self.stats.ok_or(EnvError::StatsNotAvailable)
    }
}

impl<'a, R, S> Env<'a, R, S>
where
    R: RandomSource + 'a,
    S: StatsRecorder + 'a,
{
    /// Converts this environment into a trait-object based `BattleEnv`.
    pub fn as_battle_env(&self) -> BattleEnv<'a> {
        let rng: Option<&'a dyn RandomSource> = self.rng.map(|rng| rng as _);
        let stats: Option<&'a dyn StatsRecorder> = self.stats.map(|stats| stats as _);
        Env::new(rng, stats)
    }
}
