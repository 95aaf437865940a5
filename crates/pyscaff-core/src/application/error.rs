//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No filter registered under this name.
    #[error("Unknown filter '{name}'")]
    UnknownFilter { name: String },

    /// A filter was called with the wrong number of positional arguments.
    #[error("Filter '{name}' takes {expected} argument(s), got {got}")]
    InvalidFilterArguments {
        name: String,
        expected: String,
        got: usize,
    },

    /// A filter name was registered twice.
    #[error("Filter '{name}' is already registered")]
    DuplicateFilter { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFilter { name } => vec![
                format!("No filter named '{}'", name),
                "Try: pyscaff filters to see available filters".into(),
            ],
            Self::InvalidFilterArguments { name, expected, .. } => vec![
                format!("'{}' accepts {} positional argument(s)", name, expected),
                "Try: pyscaff filters --format table for signatures".into(),
            ],
            Self::DuplicateFilter { name } => vec![
                format!("'{}' is already provided", name),
                "Pick a different filter name".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFilter { .. } => ErrorCategory::NotFound,
            Self::InvalidFilterArguments { .. } => ErrorCategory::Validation,
            Self::DuplicateFilter { .. } => ErrorCategory::Internal,
        }
    }
}
