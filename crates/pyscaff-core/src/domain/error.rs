// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass through layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// An identifier failed its grammar. The message format is part of the
    /// hook contract and is surfaced verbatim by the orchestrator.
    #[error("{value} is not a valid {label}")]
    InvalidIdentifier { value: String, label: String },

    #[error("invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("invalid version specifier '{value}': {reason}")]
    InvalidSpecifier { value: String, reason: String },

    #[error("unknown precision '{0}' (expected major, minor or micro)")]
    UnknownPrecision(String),
}

impl DomainError {
    pub(crate) fn invalid_version(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_specifier(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSpecifier {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { label, .. } if label == "project name" => vec![
                "Use ASCII letters, digits, '.', '_' or '-'".into(),
                "Start and end with a letter or digit".into(),
                "Examples: my-project, My.Project, project2".into(),
            ],
            Self::InvalidIdentifier { label, .. } if label == "repository name" => vec![
                "Use lower-case letters, digits and '_' only".into(),
                "Start and end with a letter or digit".into(),
                "Examples: my_project, project2".into(),
            ],
            Self::InvalidIdentifier { label, .. } => {
                vec![format!("Check the value supplied for the {label}")]
            }
            Self::InvalidVersion { .. } => vec![
                "Versions look like 3, 3.11 or 3.11.4".into(),
                "Pre-releases may add a, b, rc, alpha or beta: 3.13rc1".into(),
            ],
            Self::InvalidSpecifier { .. } => vec![
                "Specifiers are comma-separated clauses like >=3.9,<3.13".into(),
                "Operators: ~= == != <= >= < > ===".into(),
                "Wildcards such as ==3.* are not supported".into(),
            ],
            Self::UnknownPrecision(_) => vec!["Use one of: major, minor, micro".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::InvalidVersion { .. }
            | Self::InvalidSpecifier { .. } => ErrorCategory::Validation,
            Self::UnknownPrecision(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identifier_message_names_value_and_label() {
        let err = DomainError::InvalidIdentifier {
            value: "-bad".into(),
            label: "project name".into(),
        };
        assert_eq!(err.to_string(), "-bad is not a valid project name");
    }

    #[test]
    fn identifier_suggestions_depend_on_label() {
        let project = DomainError::InvalidIdentifier {
            value: "x".into(),
            label: "project name".into(),
        };
        let repo = DomainError::InvalidIdentifier {
            value: "x".into(),
            label: "repository name".into(),
        };
        assert!(project.suggestions().iter().any(|s| s.contains("'.'")));
        assert!(repo.suggestions().iter().any(|s| s.contains("lower-case")));
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::invalid_specifier(">>3", "bad").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::UnknownPrecision("nano".into()).category(),
            ErrorCategory::NotFound
        );
    }
}
