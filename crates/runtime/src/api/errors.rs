//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, repositories and the async handle so
//! clients can bubble them up with consistent context.
use std::time::Duration;

use arena_core::{BattleError, DomainError, ErrorSeverity};
use thiserror::Error;

use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("arena lock was poisoned")]
    LockPoisoned,

    #[error("arena requires a stats recorder to be configured before building")]
    MissingStatsRecorder,

    #[error("battle resolution did not finish within {0:?}")]
    Timeout(Duration),

    #[error("arena worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// Severity of the underlying failure, for logging and retry decisions.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Battle(err) => err.severity(),
            Self::Timeout(_) => ErrorSeverity::Recoverable,
            Self::MissingStatsRecorder => ErrorSeverity::Validation,
            Self::Repository(_) | Self::LockPoisoned | Self::WorkerJoin(_) => {
                ErrorSeverity::Fatal
            }
        }
    }
}
