//! Application layer for digen.
//!
//! This layer contains:
//! - **Services**: the generation orchestrator (`GenerationService`)
//! - **Generators**: render-and-write for the two document kinds
//! - **Ports**: traits for the filesystem and progress reporting
//! - **Errors**: application-specific error types
//!
//! Rendering itself lives in `crate::domain`; this layer only decides what
//! is written where, and in which order.

pub mod error;
pub mod generators;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationReport, GenerationService, GenerationTask, PlannedFile, ServiceFailure,
};

// Re-export port traits (for adapter implementation)
pub use ports::{FileKind, Filesystem, GenerationObserver, NoopObserver};

pub use error::ApplicationError;
