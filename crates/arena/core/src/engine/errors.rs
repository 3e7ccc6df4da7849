//! Error types for battle registration and resolution.

use crate::env::{EnvError, StatsError};
use crate::error::{DomainError, ErrorSeverity};

/// Errors surfaced by [`BattleEngine`](super::BattleEngine) operations.
///
/// Registration and resolution errors leave the slot set exactly as it was.
/// `InvalidConfig` is only raised by [`BattleEngine::new`](super::BattleEngine::new).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// `upset_scale` must be finite and strictly positive.
    #[error("invalid battle config: upset_scale must be a positive number, got {upset_scale}")]
    InvalidConfig { upset_scale: f64 },

    /// Both slots are taken; clear or resolve before registering again.
    #[error("combatant list is full ({capacity} slots), cannot add more combatants")]
    SlotsFull { capacity: usize },

    /// Resolution needs exactly two registered combatants.
    #[error("two combatants must be prepped for a battle, found {registered}")]
    InsufficientCombatants { registered: usize },

    /// The stats recorder rejected an outcome. Passed through unchanged.
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Env(#[from] EnvError),
}

impl DomainError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::SlotsFull { .. } | Self::InsufficientCombatants { .. } => {
                ErrorSeverity::Recoverable
            }
            // Any recorder failure aborts the resolution call.
            Self::Stats(_) => ErrorSeverity::Fatal,
            Self::Env(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "BATTLE_INVALID_CONFIG",
            Self::SlotsFull { .. } => "BATTLE_SLOTS_FULL",
            Self::InsufficientCombatants { .. } => "BATTLE_INSUFFICIENT_COMBATANTS",
            Self::Stats(err) => err.error_code(),
            Self::Env(err) => err.error_code(),
        }
    }
}
