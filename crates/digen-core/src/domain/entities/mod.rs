pub mod config;
pub mod service;

pub use config::{GeneratorConfig, RegisterOptions, TypesOptions};
pub use service::ServiceDef;
