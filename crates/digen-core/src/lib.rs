//! digen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the digen
//! dependency-injection boilerplate generator, following hexagonal (ports
//! and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            digen-cli (CLI)              │
//! │   (args, config discovery, progress)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │   sequential types, parallel register   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, GenerationObserver)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     digen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, MemoryFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (template, naming, documents, config)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use digen_core::domain::{
//!     NamingCase, RegisterOptions, ServiceDef, parameterize_name, render_register_document,
//! };
//!
//! let service: ServiceDef = "userService".parse().unwrap();
//! assert_eq!(service.interface(), "IUserService");
//!
//! let function = parameterize_name("register{Name}", service.name(), NamingCase::Pascal).unwrap();
//! assert_eq!(function, "registerUserService");
//!
//! let document = render_register_document(&service, &RegisterOptions::default()).unwrap();
//! assert!(document.contains("registerUserService.mock = mock;"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileKind, GenerationObserver, GenerationReport, GenerationService, NoopObserver,
        PlannedFile, ports::Filesystem,
    };
    pub use crate::domain::{
        GeneratorConfig, NamingCase, RegisterOptions, ServiceDef, TypesOptions, concat_names,
        parameterize_name,
    };
    pub use crate::error::{DigenError, DigenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
