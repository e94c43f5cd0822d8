//! Infrastructure adapters for digen.
//!
//! This crate implements the ports defined in `digen_core::application::ports`
//! and loads JSON config documents. All disk I/O lives here.

pub mod config_loader;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_loader::{ConfigDocument, ConfigLoadError, ConfigLoader, DEFAULT_CONFIG_FILES};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
