//! Collaborator access errors.

use crate::error::{DomainError, ErrorSeverity};

/// Errors that occur when a required collaborator is missing from the [`Env`](super::Env).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvError {
    #[error("RandomSource not available")]
    RandomNotAvailable,

    #[error("StatsRecorder not available")]
    StatsNotAvailable,
}

impl DomainError for EnvError {
    fn severity(&self) -> ErrorSeverity {
        // The engine cannot resolve anything without its collaborators.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RandomNotAvailable => "ENV_RANDOM_NOT_AVAILABLE",
            Self::StatsNotAvailable => "ENV_STATS_NOT_AVAILABLE",
        }
    }
}
