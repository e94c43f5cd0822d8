//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate every service's files".

pub mod generation_service;

pub use generation_service::{
    GenerationReport, GenerationService, GenerationTask, PlannedFile, ServiceFailure,
};
