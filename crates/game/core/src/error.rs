//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`FactoryError`, `InputError`, `FighterError`,
//! `ObserverError`) live next to the code that produces them. This module
//! provides the classification shared by all of them.
//!
//! Every error in the combat core is local and non-fatal: the controller
//! rejects the offending input and the match continues.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the operation was skipped; nothing needs to change
/// - **Validation**: invalid input from the host, should not be retried as-is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The operation was a no-op (e.g. attacking without a tactic).
    Recoverable,

    /// Invalid input, e.g. an unknown archetype or an input outside its phase.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
    }
}
