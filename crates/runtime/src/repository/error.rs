//! Error types raised by repository implementations.

use arena_core::StatsError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("stats repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl From<RepositoryError> for StatsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::LockPoisoned => StatsError::Unavailable(
                "stats repository lock was poisoned".to_string(),
            ),
            other => StatsError::Storage(other.to_string()),
        }
    }
}
