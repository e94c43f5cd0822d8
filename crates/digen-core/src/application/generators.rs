//! File generators: render a document and write it through the
//! [`Filesystem`] port.
//!
//! Each call writes exactly one file. A failure affects that file only;
//! callers decide what else to skip.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        RegisterOptions, ServiceDef, TypesOptions, render_register_document,
        render_types_document,
    },
    error::DigenResult,
};

/// Write the shared types document to `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn generate_types_file(
    fs: &dyn Filesystem,
    path: &Path,
    services: &[ServiceDef],
    options: &TypesOptions,
) -> DigenResult<()> {
    let content = render_types_document(services, options)?;
    fs.write_file(path, &content)?;
    debug!(bytes = content.len(), "Shared types written");
    Ok(())
}

/// Write the registration document for `service` to `path`.
#[instrument(skip_all, fields(service = %service.name(), path = %path.display()))]
pub fn generate_register_file(
    fs: &dyn Filesystem,
    path: &Path,
    service: &ServiceDef,
    options: &RegisterOptions,
) -> DigenResult<()> {
    let content = render_register_document(service, options)?;
    fs.write_file(path, &content)?;
    debug!(bytes = content.len(), "Registration file written");
    Ok(())
}
