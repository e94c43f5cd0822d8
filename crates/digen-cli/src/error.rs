//! CLI error type.
//!
//! Every failure reaching `main` is a [`CliError`]. It knows its exit code,
//! what the user can do about it, and how to print itself with or without
//! colour.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use digen_adapters::ConfigLoadError;
use digen_core::error::{DigenError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by `digen` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// `init` would overwrite an existing config document.
    #[error("Config file already exists at {path}")]
    ConfigExists { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// The config document could not be read or failed validation.
    #[error(transparent)]
    ConfigLoad(#[from] ConfigLoadError),

    /// The starter config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `digen-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] DigenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Things the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Use --force to overwrite it".into(),
                "Edit the existing file instead".into(),
            ],

            Self::ConfigLoad(err) => config_suggestions(err),

            Self::Serialize(_) => vec!["This is a bug, please report it".into()],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::ConfigLoad(ConfigLoadError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ErrorCategory::NotFound
            }
            Self::ConfigLoad(_) => ErrorCategory::Configuration,
            Self::Serialize(_) => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Template => ErrorCategory::UserError,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Render the message, the cause chain (when `verbose`) and suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {}\n",
                    paint("caused by:", |t| t.dimmed().to_string()),
                    err
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t
                    .dimmed()
                    .to_string())
            ));
        }

        out
    }

    /// Emit one event: warn for mistakes the user can fix, error otherwise.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Command failed");
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Underlying error");
        }
    }
}

fn config_suggestions(err: &ConfigLoadError) -> Vec<String> {
    let file = err.path().display();
    match err {
        ConfigLoadError::Read { .. } => vec![
            format!("Check that '{file}' exists and is readable"),
            "Run 'digen init' to create a starter config".into(),
        ],
        ConfigLoadError::Malformed { .. } => vec![
            format!("Fix the JSON syntax in '{file}'"),
            "Run 'digen init --force' to start over from the example".into(),
        ],
        ConfigLoadError::MissingField { field, .. } => vec![
            format!("Add '{field}' to '{file}'"),
            "Every service needs both \"name\" and \"interface\"".into(),
        ],
        ConfigLoadError::InvalidField {
            field, expected, ..
        } => vec![format!("Change '{field}' in '{file}' to {expected}")],
        ConfigLoadError::InvalidService { source, .. } => source.suggestions(),
    }
}

/// What kind of failure, and therefore which exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or service specs. Exit 2.
    UserError,
    /// A named file does not exist. Exit 3.
    NotFound,
    /// The config document is unusable. Exit 4.
    Configuration,
    /// I/O or anything unexpected. Exit 1.
    Internal,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Attach a context message while converting into [`CliResult`].
///
/// Implemented for `io::Error` (message kept in `IoError`) and
/// `DigenError` (message only logged).
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, DigenError> {
    /// Core errors already carry their context, so the message is only
    /// logged.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            tracing::debug!(context = %f().into(), "Core error");
            CliError::Core(e)
        })
    }
}
