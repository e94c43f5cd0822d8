//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not template
//! or naming logic. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while writing generated files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The worker pool for the registration phase could not be built.
    #[error("Failed to start worker pool: {reason}")]
    WorkerPool { reason: String },

    /// Some services failed; their siblings' files were still written.
    #[error("Generation incomplete: {failed} of {total} services failed")]
    GenerationIncomplete { failed: usize, total: usize },

    /// Filesystem lock poisoned (in-memory adapter).
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-running overwrites any partially written output".into(),
            ],
            Self::WorkerPool { .. } => vec![
                "Try a smaller --jobs value".into(),
                "Use --jobs 1 to generate sequentially".into(),
            ],
            Self::GenerationIncomplete { .. } => vec![
                "Fix the errors listed above and run the command again".into(),
                "Files of successful services are already on disk".into(),
            ],
            Self::LockPoisoned => vec!["A worker panicked while writing".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::WorkerPool { .. } | Self::LockPoisoned => {
                ErrorCategory::Io
            }
            Self::GenerationIncomplete { .. } => ErrorCategory::Internal,
        }
    }
}
