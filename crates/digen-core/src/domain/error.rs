// ============================================================================
// domain/error.rs - TEMPLATE AND SERVICE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported from worker threads and collected into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Unclosed parameter starting at byte {position}: missing '}}'")]
    UnclosedParameter { position: usize },

    #[error("Missing value for template parameter '{name}'")]
    MissingParameter { name: String },

    // ========================================================================
    // Service Definition Errors
    // ========================================================================
    #[error("Service name cannot be empty")]
    EmptyServiceName,

    #[error("Invalid service specification '{spec}': {reason}")]
    InvalidServiceSpec { spec: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnclosedParameter { position } => vec![
                format!("A '{{' at byte {} is never closed", position),
                "Every placeholder must look like {name}".into(),
            ],
            Self::MissingParameter { name } => vec![
                format!("Bind a value for '{}' before rendering", name),
                "Name patterns receive 'Name' and 'name' automatically".into(),
            ],
            Self::EmptyServiceName => vec![
                "Every service needs a non-empty name".into(),
                "Example: digen generate userService".into(),
            ],
            Self::InvalidServiceSpec { .. } => vec![
                "Service specs look like NAME or NAME:Interface".into(),
                "Example: digen generate userService:IUserService".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnclosedParameter { .. } | Self::MissingParameter { .. } => {
                ErrorCategory::Template
            }
            Self::EmptyServiceName | Self::InvalidServiceSpec { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}

/// Result alias for pure domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_parameter_message_mentions_position() {
        let err = DomainError::UnclosedParameter { position: 4 };
        assert!(err.to_string().contains("byte 4"));
    }

    #[test]
    fn template_errors_are_template_category() {
        assert_eq!(
            DomainError::MissingParameter { name: "x".into() }.category(),
            ErrorCategory::Template
        );
        assert_eq!(
            DomainError::EmptyServiceName.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn every_error_has_suggestions() {
        let errors = [
            DomainError::UnclosedParameter { position: 0 },
            DomainError::MissingParameter { name: "Name".into() },
            DomainError::EmptyServiceName,
            DomainError::InvalidServiceSpec {
                spec: ":IFoo".into(),
                reason: "empty name".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "{err:?}");
        }
    }
}
