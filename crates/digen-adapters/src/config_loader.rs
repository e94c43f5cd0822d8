//! JSON configuration loader.
//!
//! Reads a generation config document, validates it field by field, and
//! turns it into core types ready for the generation service.
//!
//! # Document format
//!
//! ```json
//! {
//!   "output": "src/services",
//!   "services": [
//!     { "name": "userService", "interface": "IUserService" }
//!   ],
//!   "types": { "libraryPath": "@digen/container" },
//!   "register": { "typesModule": "./types" }
//! }
//! ```
//!
//! `output` and `services` are required, as are `name` and `interface` on
//! every service. `types` and `register` are optional; missing keys inside
//! them fall back to the core defaults.
//!
//! # Discovery
//!
//! Without an explicit path the working directory is probed for
//! [`DEFAULT_CONFIG_FILES`] in order. The first file that exists wins;
//! finding none is not an error.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument};

use digen_core::domain::{DomainError, GeneratorConfig, RegisterOptions, ServiceDef, TypesOptions};

/// Conventional config file names, highest priority first.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["digen.config.json", "digen.json", ".digenrc.json"];

/// Why a config document could not be loaded.
///
/// `field` values are JSON paths such as `services[2].interface`.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config file '{path}' is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file '{path}' is missing required field '{field}'")]
    MissingField { path: PathBuf, field: String },

    #[error("Config file '{path}': field '{field}' must be {expected}")]
    InvalidField {
        path: PathBuf,
        field: String,
        expected: &'static str,
    },

    #[error("Config file '{path}': service at '{field}' is invalid: {source}")]
    InvalidService {
        path: PathBuf,
        field: String,
        #[source]
        source: DomainError,
    },
}

impl ConfigLoadError {
    /// The config file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Malformed { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidField { path, .. }
            | Self::InvalidService { path, .. } => path,
        }
    }
}

/// A validated config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    pub output: PathBuf,
    pub services: Vec<ServiceDef>,
    pub types: TypesOptions,
    pub register: RegisterOptions,
}

impl ConfigDocument {
    /// Starter document written by `digen init`.
    pub fn example() -> Self {
        let services = [("userService", "IUserService"), ("logger", "ILogger")]
            .into_iter()
            .filter_map(|(name, interface)| ServiceDef::new(name, interface).ok())
            .collect();

        Self {
            output: PathBuf::from("src/services"),
            services,
            types: TypesOptions::default(),
            register: RegisterOptions::default(),
        }
    }

    /// Pretty JSON for writing to disk.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Build a generator config, optionally replacing the output directory.
    pub fn into_generator_config(self, output: Option<PathBuf>) -> GeneratorConfig {
        GeneratorConfig::new(output.unwrap_or(self.output), self.services)
            .with_types_options(self.types)
            .with_register_options(self.register)
    }
}

/// Loads and discovers config documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and validate the document at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<ConfigDocument, ConfigLoadError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::parse(&text, path)?;
        debug!(services = document.services.len(), "Config loaded");
        Ok(document)
    }

    /// Validate `text`; `origin` only labels errors.
    pub fn parse(text: &str, origin: &Path) -> Result<ConfigDocument, ConfigLoadError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| ConfigLoadError::Malformed {
                path: origin.to_path_buf(),
                source,
            })?;
        DocumentReader { origin }.read(&value)
    }

    /// First of [`DEFAULT_CONFIG_FILES`] that exists in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let found = DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        debug!(dir = %dir.display(), found = ?found, "Config discovery");
        found
    }
}

/// Field-by-field validation with JSON paths in errors.
struct DocumentReader<'a> {
    origin: &'a Path,
}

impl DocumentReader<'_> {
    fn read(&self, value: &Value) -> Result<ConfigDocument, ConfigLoadError> {
        let root = self.object(value, "<root>")?;

        let output = self.required_str(root, "", "output")?;

        let services = match root.get("services") {
            None => return Err(self.missing("services")),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.service(item, &format!("services[{i}]")))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(self.invalid("services", "an array")),
        };

        Ok(ConfigDocument {
            output: PathBuf::from(output),
            services,
            types: self.options(root, "types")?,
            register: self.options(root, "register")?,
        })
    }

    fn service(&self, value: &Value, field: &str) -> Result<ServiceDef, ConfigLoadError> {
        let object = self.object(value, field)?;
        let name = self.required_str(object, field, "name")?;
        let interface = self.required_str(object, field, "interface")?;

        ServiceDef::new(name, interface).map_err(|source| ConfigLoadError::InvalidService {
            path: self.origin.to_path_buf(),
            field: field.to_string(),
            source,
        })
    }

    fn options<T>(&self, root: &Map<String, Value>, key: &str) -> Result<T, ConfigLoadError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match root.get(key) {
            None => Ok(T::default()),
            Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
                .map_err(|_| self.invalid(key, "an object of string options")),
            Some(_) => Err(self.invalid(key, "an object")),
        }
    }

    fn object<'v>(
        &self,
        value: &'v Value,
        field: &str,
    ) -> Result<&'v Map<String, Value>, ConfigLoadError> {
        value
            .as_object()
            .ok_or_else(|| self.invalid(field, "an object"))
    }

    fn required_str<'v>(
        &self,
        object: &'v Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Result<&'v str, ConfigLoadError> {
        let field = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };

        match object.get(key) {
            None => Err(self.missing(&field)),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(self.invalid(&field, "a string")),
        }
    }

    fn missing(&self, field: &str) -> ConfigLoadError {
        ConfigLoadError::MissingField {
            path: self.origin.to_path_buf(),
            field: field.to_string(),
        }
    }

    fn invalid(&self, field: &str, expected: &'static str) -> ConfigLoadError {
        ConfigLoadError::InvalidField {
            path: self.origin.to_path_buf(),
            field: field.to_string(),
            expected,
        }
    }
}
