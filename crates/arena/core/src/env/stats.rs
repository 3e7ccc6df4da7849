//! Stats recorder contract.
//!
//! The engine only announces outcomes. Durable counters live behind this
//! trait (see the runtime's repositories), keyed by [`CombatantId`].

use crate::error::{DomainError, ErrorSeverity};
use crate::state::CombatantId;

/// Result of a single battle from one combatant's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

/// Failures raised by a [`StatsRecorder`]. Surfaced verbatim by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    #[error("stats store unavailable: {0}")]
    Unavailable(String),

    #[error("combatant {0} not found in stats store")]
    UnknownCombatant(CombatantId),

    #[error("combatant {0} has been deleted")]
    Deleted(CombatantId),

    #[error("stats storage failure: {0}")]
    Storage(String),
}

impl DomainError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCombatant(_) | Self::Deleted(_) => ErrorSeverity::Validation,
            Self::Unavailable(_) | Self::Storage(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "STATS_UNAVAILABLE",
            Self::UnknownCombatant(_) => "STATS_UNKNOWN_COMBATANT",
            Self::Deleted(_) => "STATS_DELETED",
            Self::Storage(_) => "STATS_STORAGE",
        }
    }
}

/// Records per-combatant battle outcomes in the system of record.
///
/// Implementations are called synchronously from inside a battle resolution;
/// a slow recorder stalls the resolution.
pub trait StatsRecorder: Send + Sync {
    /// Record one outcome for one combatant.
    fn record_result(&self, id: CombatantId, outcome: Outcome) -> Result<(), StatsError>;

    /// Record both sides of a finished battle.
    ///
    /// The default reports `Win` for the winner, then `Loss` for the loser. A
    /// failure between the two leaves the win recorded; stores that need both
    /// writes to land together should override this with a single update.
    fn record_battle(&self, winner: CombatantId, loser: CombatantId) -> Result<(), StatsError> {
        self.record_result(winner, Outcome::Win)?;
        self.record_result(loser, Outcome::Loss)
    }
}

impl<T: StatsRecorder + ?Sized> StatsRecorder for std::sync::Arc<T> {
    fn record_result(&self, id: CombatantId, outcome: Outcome) -> Result<(), StatsError> {
        (**self).record_result(id, outcome)
    }

    fn record_battle(&self, winner: CombatantId, loser: CombatantId) -> Result<(), StatsError> {
        (**self).record_battle(winner, loser)
    }
}
