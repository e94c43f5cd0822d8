//! Generation options and the per-run configuration.
//!
//! Options are plain structs with documented defaults. Callers build them
//! once and pass them explicitly; nothing is read from process-wide state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::service::ServiceDef;

/// Package the container type is imported from.
pub const DEFAULT_LIBRARY_PATH: &str = "@digen/container";
/// Container type constructor exported by the DI library.
pub const DEFAULT_CONTAINER_TYPE: &str = "Container";
/// Alias for the container specialised to `ServicesList`.
pub const DEFAULT_CONTEXT_TYPE: &str = "ServicesContainer";
/// Module specifier of the shared types file, relative to a registration file.
pub const DEFAULT_TYPES_MODULE: &str = "./types";

/// Options for the shared types document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypesOptions {
    /// Default: [`DEFAULT_LIBRARY_PATH`].
    pub library_path: String,
    /// Default: [`DEFAULT_CONTAINER_TYPE`].
    pub container_type: String,
    /// Default: [`DEFAULT_CONTEXT_TYPE`].
    pub context_type: String,
}

impl Default for TypesOptions {
    fn default() -> Self {
        Self {
            library_path: DEFAULT_LIBRARY_PATH.into(),
            container_type: DEFAULT_CONTAINER_TYPE.into(),
            context_type: DEFAULT_CONTEXT_TYPE.into(),
        }
    }
}

/// Options for the per-service registration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterOptions {
    /// Default: [`DEFAULT_LIBRARY_PATH`].
    pub library_path: String,
    /// Default: [`DEFAULT_CONTAINER_TYPE`].
    pub container_type: String,
    /// Default: [`DEFAULT_CONTEXT_TYPE`].
    pub context_type: String,
    /// Default: [`DEFAULT_TYPES_MODULE`].
    pub types_module: String,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            library_path: DEFAULT_LIBRARY_PATH.into(),
            container_type: DEFAULT_CONTAINER_TYPE.into(),
            context_type: DEFAULT_CONTEXT_TYPE.into(),
            types_module: DEFAULT_TYPES_MODULE.into(),
        }
    }
}

/// Everything one generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    output_dir: PathBuf,
    services: Vec<ServiceDef>,
    types_options: TypesOptions,
    register_options: RegisterOptions,
}

impl GeneratorConfig {
    /// Create a configuration using default options.
    pub fn new(output_dir: impl Into<PathBuf>, services: Vec<ServiceDef>) -> Self {
        Self {
            output_dir: output_dir.into(),
            services,
            types_options: TypesOptions::default(),
            register_options: RegisterOptions::default(),
        }
    }

    pub fn with_types_options(mut self, options: TypesOptions) -> Self {
        self.types_options = options;
        self
    }

    pub fn with_register_options(mut self, options: RegisterOptions) -> Self {
        self.register_options = options;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn services(&self) -> &[ServiceDef] {
        &self.services
    }

    pub fn types_options(&self) -> &TypesOptions {
        &self.types_options
    }

    pub fn register_options(&self) -> &RegisterOptions {
        &self.register_options
    }
}
