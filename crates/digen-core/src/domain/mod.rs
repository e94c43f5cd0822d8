//! Core domain layer for digen.
//!
//! This module contains pure logic with no I/O: the placeholder template
//! engine, identifier case conversion, service definitions and the
//! generated documents. Writing files is done through the ports defined in
//! the application layer.
//!
//! ## Layout
//!
//! - **template**: `{param}` parsing and rendering
//! - **naming**: case conversion and name patterns
//! - **entities**: `ServiceDef`, options and `GeneratorConfig`
//! - **documents**: the `types.ts` and `register<Name>.ts` documents
//!
// Public API - what the world sees
pub mod documents;
pub mod entities;
pub mod error;
pub mod naming;
pub mod template;

// Re-exports for convenience
pub use documents::{
    SERVICES_LIST, TYPES_FILE_NAME, register_file_name, render_register_document,
    render_types_document,
};
pub use entities::{
    GeneratorConfig, RegisterOptions, ServiceDef, TypesOptions,
    config::{
        DEFAULT_CONTAINER_TYPE, DEFAULT_CONTEXT_TYPE, DEFAULT_LIBRARY_PATH, DEFAULT_TYPES_MODULE,
    },
    service::infer_interface,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use naming::{
    NamingCase, concat_names, parameterize_name, to_camel_case, to_kebab_case, to_pascal_case,
    to_screaming_snake_case, to_snake_case,
};
pub use template::{Bindings, InterpolationPart, Template};
