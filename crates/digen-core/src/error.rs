//! Root error type of the core crate.
//!
//! [`DigenError`] is what every public operation returns. Adapters produce
//! it through `ApplicationError`.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for digen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigenError {
    /// Template or service definition errors.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration and I/O failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl DigenError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse grouping used by frontends to pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Io,
    Internal,
}

pub type DigenResult<T> = Result<T, DigenError>;
