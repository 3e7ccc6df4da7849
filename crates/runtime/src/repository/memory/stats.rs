//! In-memory stats store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use arena_core::{CombatantId, Outcome, StatsError, StatsRecorder};

use crate::repository::{MealStats, RepositoryError, Result, StatsRepository, ensure_live};

/// In-memory implementation of [`StatsRepository`].
///
/// `record_battle` updates both combatants under a single write lock, so a
/// reader never observes a win without the matching loss.
///
/// When built with [`InMemoryStatsRepo::with_combatants`], only the listed
/// ids are accepted and anything else fails with
/// [`StatsError::UnknownCombatant`]. Ids passed to
/// [`mark_deleted`](StatsRepository::mark_deleted) fail with
/// [`StatsError::Deleted`].
pub struct InMemoryStatsRepo {
    stats: RwLock<BTreeMap<CombatantId, MealStats>>,
    known: Option<BTreeSet<CombatantId>>,
}

impl InMemoryStatsRepo {
    /// Create a new empty repository that accepts any id.
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(BTreeMap::new()),
            known: None,
        }
    }

    /// Create a repository restricted to the given combatants.
    pub fn with_combatants(ids: impl IntoIterator<Item = CombatantId>) -> Self {
        Self {
            stats: RwLock::new(BTreeMap::new()),
            known: Some(ids.into_iter().collect()),
        }
    }

    fn check_known(&self, id: CombatantId) -> std::result::Result<(), StatsError> {
        match &self.known {
            Some(known) if !known.contains(&id) => Err(StatsError::UnknownCombatant(id)),
            _ => Ok(()),
        }
    }
}

impl Default for InMemoryStatsRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsRecorder for InMemoryStatsRepo {
    fn record_result(&self, id: CombatantId, outcome: Outcome) -> std::result::Result<(), StatsError> {
        self.check_known(id)?;
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        ensure_live(&stats, [id])?;
        stats.entry(id).or_default().apply(outcome);
        Ok(())
    }

    fn record_battle(
        &self,
        winner: CombatantId,
        loser: CombatantId,
    ) -> std::result::Result<(), StatsError> {
        self.check_known(winner)?;
        self.check_known(loser)?;
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        ensure_live(&stats, [winner, loser])?;
        stats.entry(winner).or_default().apply(Outcome::Win);
        stats.entry(loser).or_default().apply(Outcome::Loss);
        Ok(())
    }
}

impl StatsRepository for InMemoryStatsRepo {
    fn stats(&self, id: CombatantId) -> Result<Option<MealStats>> {
        let stats = self
            .stats
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stats.get(&id).copied())
    }

    fn all(&self) -> Result<Vec<(CombatantId, MealStats)>> {
        let stats = self
            .stats
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stats
            .iter()
            .filter(|(_, s)| !s.deleted)
            .map(|(id, s)| (*id, *s))
            .collect())
    }

    fn mark_deleted(&self, id: CombatantId) -> Result<()> {
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        stats.entry(id).or_default().deleted = true;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        stats.clear();
        Ok(())
    }
}
