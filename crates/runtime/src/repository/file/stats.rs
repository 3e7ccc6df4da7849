//! JSON file-backed stats store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use arena_core::{CombatantId, Outcome, StatsError, StatsRecorder};

use crate::repository::{MealStats, RepositoryError, Result, StatsRepository, ensure_live};

/// File-based implementation of [`StatsRepository`].
///
/// Counters are cached in memory and the whole map is rewritten after every
/// update.
///
/// # File Format
///
/// A single JSON object keyed by combatant id. `deleted` defaults to false
/// when absent:
///
/// ```text
/// {
///   "1": { "battles": 3, "wins": 2, "deleted": false },
///   "2": { "battles": 3, "wins": 1, "deleted": true }
/// }
/// ```
///
/// Writes go to `<path>.tmp` first and are renamed into place, so a crash
/// never leaves a half-written file. The in-memory cache only changes after
/// the rename succeeds.
pub struct FileStatsRepo {
    path: PathBuf,
    stats: RwLock<BTreeMap<CombatantId, MealStats>>,
}

impl FileStatsRepo {
    /// Open the store at `path`, loading existing counters if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let stats = if path.exists() {
            let bytes = fs::read(&path)?;
            if bytes.is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_slice(&bytes).map_err(|e| {
                    RepositoryError::CorruptedData(format!("{}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened stats store {} ({} entries)", path.display(), stats.len());

        Ok(Self {
            path,
            stats: RwLock::new(stats),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, stats: &BTreeMap<CombatantId, MealStats>) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes =
            serde_json::to_vec_pretty(stats).map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved stats store to {}", self.path.display());
        Ok(())
    }

    /// Apply `outcomes` to a copy of the cache, persist it, then commit.
    ///
    /// Nothing is written if any of the combatants is marked deleted.
    fn update(&self, outcomes: &[(CombatantId, Outcome)]) -> std::result::Result<(), StatsError> {
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        ensure_live(&stats, outcomes.iter().map(|&(id, _)| id))?;

        let mut next = stats.clone();
        for &(id, outcome) in outcomes {
            next.entry(id).or_default().apply(outcome);
        }
        self.persist(&next)?;
        *stats = next;
        Ok(())
    }
}

impl StatsRecorder for FileStatsRepo {
    fn record_result(&self, id: CombatantId, outcome: Outcome) -> std::result::Result<(), StatsError> {
        self.update(&[(id, outcome)])
    }

    fn record_battle(
        &self,
        winner: CombatantId,
        loser: CombatantId,
    ) -> std::result::Result<(), StatsError> {
        self.update(&[(winner, Outcome::Win), (loser, Outcome::Loss)])
    }
}

impl StatsRepository for FileStatsRepo {
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
        let mut next = stats.clone();
        next.entry(id).or_default().deleted = true;
        self.persist(&next)?;
        *stats = next;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let mut stats = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let empty = BTreeMap::new();
        self.persist(&empty)?;
        *stats = empty;
        Ok(())
    }
}
