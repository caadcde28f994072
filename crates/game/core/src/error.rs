//! Common error infrastructure for delve-core.
//!
//! Domain-specific errors (`ConfigError`, `GenerationError`, `MoveError`) live
//! next to the code that produces them. This module holds the classification
//! shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each component has its own error enum with specific variants
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Expected rejections are not errors**: overlapping rooms, blocked moves and
//!   dropped monster placements are ordinary control flow

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry, e.g. with another seed.
    ///
    /// Examples: generation produced no rooms
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero grid dimension, actor not found, move off the grid
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

/// Common trait for all delve-core errors.
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
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
