//! Catalog validation and lookup errors.

use arena_core::{CombatantId, DomainError, ErrorSeverity};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Meal name must not be empty")]
    EmptyName,

    #[error("Meal with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Meal with ID {0} not found")]
    NotFound(CombatantId),

    #[error("Meal with name {0} not found")]
    NameNotFound(String),

    #[error("Meal with ID {0} has been deleted")]
    Deleted(CombatantId),
}

impl DomainError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPrice(_) => "CATALOG_INVALID_PRICE",
            Self::InvalidDifficulty(_) => "CATALOG_INVALID_DIFFICULTY",
            Self::EmptyName => "CATALOG_EMPTY_NAME",
            Self::DuplicateName(_) => "CATALOG_DUPLICATE_NAME",
            Self::NotFound(_) => "CATALOG_NOT_FOUND",
            Self::NameNotFound(_) => "CATALOG_NAME_NOT_FOUND",
            Self::Deleted(_) => "CATALOG_DELETED",
        }
    }
}
