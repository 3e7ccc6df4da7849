//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`BattleError`, `StatsError`, `EnvError`) live next
//! to the operations that raise them. This module holds the shared severity
//! classification and the trait every error enum in the crate implements.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can change slot state and try again
/// - **Validation**: invalid input, should not retry without changes
/// - **Fatal**: a collaborator failed and the call cannot complete
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - clear or resolve the slot set, then retry.
    ///
    /// Examples: slots full, not enough combatants registered
    Recoverable,

    /// Validation error - invalid input.
    ///
    /// Examples: unknown or deleted combatant id, non-positive upset scale
    Validation,

    /// Fatal error - a required collaborator failed or is missing.
    ///
    /// Examples: stats store rejected the write, no randomness source configured
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if a collaborator failed and the call cannot complete.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable `SCREAMING_SNAKE_CASE` code from `error_code`
pub trait DomainError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Validation.is_fatal());
        assert!(!ErrorSeverity::Recoverable.is_fatal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
