//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `digen-adapters` (filesystem) and `digen-cli` (progress
//! display) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `GenerationObserver`: per-file completion reporting

pub mod output;

pub use output::{FileKind, Filesystem, GenerationObserver, NoopObserver};

#[cfg(test)]
pub use output::MockFilesystem;
