//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::{DigenError, DigenResult};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `digen_adapters::filesystem::LocalFilesystem` (production)
/// - `digen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Registration files are written from worker threads, so implementations
/// must be `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DigenResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> DigenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Which generated document a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    SharedTypes,
    Registration,
}

/// Port for progress reporting during a generation run.
///
/// Every method has an empty default, implementors override what they need.
/// Called from worker threads during the registration phase.
pub trait GenerationObserver: Send + Sync {
    /// A run is starting with `files` files planned.
    fn on_start(&self, _files: usize) {}

    /// A file was written successfully.
    fn on_file_written(&self, _service: &str, _kind: FileKind, _path: &Path) {}

    /// Work for `service` failed; remaining files for it are skipped.
    fn on_service_failed(&self, _service: &str, _error: &DigenError) {}

    /// All work has finished.
    fn on_finish(&self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
