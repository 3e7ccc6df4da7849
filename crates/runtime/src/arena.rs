//! Thread-safe battle arena.
//!
//! [`Arena`] owns one [`BattleEngine`] behind a read/write lock together with
//! the injected collaborators. Mutating operations (`register`,
//! `resolve_battle`, `clear`) hold the write lock for their whole duration;
//! `score` and `list_combatants` share the read lock. Independent arenas share
//! nothing.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use arena_core::{
    BattleConfig, BattleEngine, Combatant, CombatantId, Env, RandomSource, StatsRecorder,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::random::ThreadRandom;

/// Arena configuration shared by the arena and its async handle.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub battle: BattleConfig,
    /// Upper bound on a battle resolution issued through
    /// [`ArenaHandle`](crate::ArenaHandle).
    pub resolve_timeout: Duration,
}

impl ArenaConfig {
    pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            resolve_timeout: Self::DEFAULT_RESOLVE_TIMEOUT,
        }
    }
}

/// Lock-guarded battle engine with its collaborators.
pub struct Arena {
    engine: RwLock<BattleEngine>,
    rng: Arc<dyn RandomSource>,
    stats: Arc<dyn StatsRecorder>,
    config: ArenaConfig,
}

impl Arena {
    /// Create a new arena builder
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::new()
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BattleEngine>> {
        self.engine.read().map_err(|_| RuntimeError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BattleEngine>> {
        self.engine.write().map_err(|_| RuntimeError::LockPoisoned)
    }

    /// Register a combatant in the next open slot.
    pub fn register(&self, combatant: Combatant) -> Result<()> {
        let mut engine = self.write()?;
        let id = combatant.id;
        engine.register(combatant)?;
        debug!(
            "Registered combatant {} ({} of {})",
            id,
            engine.list_combatants().len(),
            BattleConfig::MAX_COMBATANTS
        );
        Ok(())
    }

    /// Score a combatant. Waits while a mutating operation is in progress.
    pub fn score(&self, combatant: &Combatant) -> Result<f64> {
        let _engine = self.read()?;
        Ok(BattleEngine::score(combatant))
    }

    /// Snapshot of the registered combatants in slot order.
    pub fn list_combatants(&self) -> Result<Vec<Combatant>> {
        Ok(self.read()?.list_combatants().to_vec())
    }

    /// Empty every slot.
    pub fn clear(&self) -> Result<()> {
        self.write()?.clear();
        debug!("Cleared combatant slots");
        Ok(())
    }

    /// Resolve the battle between the two registered combatants.
    ///
    /// The stats recorder is called while the write lock is held; a stalled
    /// recorder blocks every other operation on this arena.
    pub fn resolve_battle(&self) -> Result<CombatantId> {
        let mut engine = self.write()?;
        let env = Env::with_all(self.rng.as_ref(), self.stats.as_ref());

        match engine.resolve(&env) {
            Ok(verdict) => {
                info!(
                    winner = %verdict.winner,
                    loser = %verdict.loser,
                    winner_score = verdict.winner_score,
                    loser_score = verdict.loser_score,
                    threshold = verdict.threshold,
                    roll = verdict.roll,
                    upset = verdict.upset,
                    "Battle resolved"
                );
                Ok(verdict.winner)
            }
            Err(err) => {
                warn!("Battle resolution failed: {}", err);
                Err(err.into())
            }
        }
    }
}

/// Builder for [`Arena`].
pub struct ArenaBuilder {
    config: ArenaConfig,
    rng: Option<Arc<dyn RandomSource>>,
    stats: Option<Arc<dyn StatsRecorder>>,
}

impl ArenaBuilder {
    fn new() -> Self {
        Self {
            config: ArenaConfig::default(),
            rng: None,
            stats: None,
        }
    }

    /// Override arena configuration
    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the randomness source. Defaults to [`ThreadRandom`].
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Arc::new(rng));
        self
    }

    /// Set the stats recorder (required).
    pub fn stats(mut self, stats: impl StatsRecorder + 'static) -> Self {
        self.stats = Some(Arc::new(stats));
        self
    }

    /// Share an existing stats recorder with other components.
    pub fn shared_stats(mut self, stats: Arc<dyn StatsRecorder>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn build(self) -> Result<Arena> {
        let stats = self.stats.ok_or(RuntimeError::MissingStatsRecorder)?;
        let rng = self.rng.unwrap_or_else(|| Arc::new(ThreadRandom));
        let engine = BattleEngine::new(self.config.battle.clone())?;

        Ok(Arena {
            engine: RwLock::new(engine),
            rng,
            stats,
            config: self.config,
        })
    }
}
