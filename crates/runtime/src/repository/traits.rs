//! Repository contracts for reading battle statistics.

use std::collections::BTreeMap;

use arena_core::{CombatantId, Outcome, StatsError, StatsRecorder};
use serde::{Deserialize, Serialize};

use super::Result;

/// Battle counters for one combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealStats {
    pub battles: u32,
    pub wins: u32,
    /// Set by [`StatsRepository::mark_deleted`]. Deleted combatants keep their
    /// counters but accept no further outcomes.
    #[serde(default)]
    pub deleted: bool,
}

impl MealStats {
    pub fn new(battles: u32, wins: u32) -> Self {
        Self {
            battles,
            wins,
            deleted: false,
        }
    }

    /// Count one finished battle. A win also counts towards `wins`.
    pub fn apply(&mut self, outcome: Outcome) {
        self.battles += 1;
        if outcome == Outcome::Win {
            self.wins += 1;
        }
    }

    pub fn losses(&self) -> u32 {
        self.battles - self.wins
    }

    /// Share of battles won, in `[0, 1]`. Zero when no battles were fought.
    pub fn win_ratio(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.battles)
    }
}

/// Fails with `StatsError::Deleted` if any of `ids` is marked deleted in `table`.
pub(crate) fn ensure_live(
    table: &BTreeMap<CombatantId, MealStats>,
    ids: impl IntoIterator<Item = CombatantId>,
) -> std::result::Result<(), StatsError> {
    for id in ids {
        if table.get(&id).is_some_and(|stats| stats.deleted) {
            return Err(StatsError::Deleted(id));
        }
    }
    Ok(())
}

/// Read side of a stats store.
///
/// Writes go through [`StatsRecorder`], so any repository can be handed to
/// the engine directly.
pub trait StatsRepository: StatsRecorder {
    /// Counters for one combatant, `None` if it never fought.
    fn stats(&self, id: CombatantId) -> Result<Option<MealStats>>;

    /// Every live combatant with recorded battles, ordered by id.
    fn all(&self) -> Result<Vec<(CombatantId, MealStats)>>;

    /// Soft-delete a combatant. Later outcomes for it fail with
    /// `StatsError::Deleted`; its counters stay readable through `stats`.
    fn mark_deleted(&self, id: CombatantId) -> Result<()>;

    /// Drop every counter.
    fn reset(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_counts_battles_and_wins() {
        let mut stats = MealStats::default();
        stats.apply(Outcome::Win);
        stats.apply(Outcome::Loss);
        stats.apply(Outcome::Win);

        assert_eq!(stats, MealStats::new(3, 2));
        assert_eq!(stats.losses(), 1);
        assert!((stats.win_ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn ensure_live_reports_first_deleted_id() {
        let mut table = BTreeMap::new();
        table.insert(CombatantId(1), MealStats::new(2, 1));
        table.insert(
            CombatantId(2),
            MealStats {
                deleted: true,
                ..MealStats::default()
            },
        );

        assert_eq!(ensure_live(&table, [CombatantId(1), CombatantId(3)]), Ok(()));
        assert_eq!(
            ensure_live(&table, [CombatantId(1), CombatantId(2)]),
            Err(StatsError::Deleted(CombatantId(2)))
        );
    }

    #[test]
    fn win_ratio_without_battles_is_zero() {
        assert_eq!(MealStats::default().win_ratio(), 0.0);
    }
}
