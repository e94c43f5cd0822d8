//! Run configuration for `digen generate`.
//!
//! [`resolve`] merges command-line arguments with the config document into
//! a [`GeneratorConfig`]. The core crate never sees CLI flags.
//!
//! # Resolution order (highest priority first)
//!
//! Services:
//! 1. `SERVICE` arguments
//! 2. The config document (`--config`/`DIGEN_CONFIG`, else discovered)
//! 3. None
//!
//! Output directory: `--output`, then the document's `output`, then
//! `./services`. Option flags override the document's `types`/`register`
//! objects, which override the built-in defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use digen_adapters::{ConfigDocument, ConfigLoader};
use digen_core::domain::{GeneratorConfig, RegisterOptions, ServiceDef, TypesOptions};

use crate::{
    cli::GenerateArgs,
    error::{CliError, CliResult},
};

/// Output directory when neither the flag nor a document names one.
pub const DEFAULT_OUTPUT_DIR: &str = "services";

/// Where the services of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSource {
    CommandLine,
    ConfigFile(PathBuf),
    Nothing,
}

/// A fully resolved `generate` invocation.
#[derive(Debug)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    pub source: ServiceSource,
}

/// Merge `args` with the config document into a [`RunConfig`].
///
/// `explicit_config` is `--config`; without it `cwd` is searched.
#[instrument(skip_all)]
pub fn resolve(
    args: &GenerateArgs,
    explicit_config: Option<&Path>,
    cwd: &Path,
) -> CliResult<RunConfig> {
    let cli_services = parse_services(&args.services)?;

    let config_path = match explicit_config {
        Some(path) => Some(cwd.join(path)),
        None => ConfigLoader::discover(cwd),
    };
    let document = config_path
        .as_deref()
        .map(ConfigLoader::load)
        .transpose()?;

    let (services, source) = match (&document, &config_path) {
        _ if !cli_services.is_empty() => (cli_services, ServiceSource::CommandLine),
        (Some(doc), Some(path)) => (doc.services.clone(), ServiceSource::ConfigFile(path.clone())),
        _ => (Vec::new(), ServiceSource::Nothing),
    };

    let output = args
        .output
        .clone()
        .or_else(|| document.as_ref().map(|doc| doc.output.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let (types, register) = match document {
        Some(ConfigDocument {
            types, register, ..
        }) => (types, register),
        None => (TypesOptions::default(), RegisterOptions::default()),
    };
    let (types, register) = apply_overrides(args, types, register);

    debug!(
        services = services.len(),
        source = ?source,
        output = %output.display(),
        "Run configuration resolved"
    );

    Ok(RunConfig {
        generator: GeneratorConfig::new(output, services)
            .with_types_options(types)
            .with_register_options(register),
        source,
    })
}

fn parse_services(specs: &[String]) -> CliResult<Vec<ServiceDef>> {
    specs
        .iter()
        .map(|spec| {
            spec.parse::<ServiceDef>()
                .map_err(|e| CliError::Core(e.into()))
        })
        .collect()
}

/// Flags shared by both documents are applied to both.
fn apply_overrides(
    args: &GenerateArgs,
    mut types: TypesOptions,
    mut register: RegisterOptions,
) -> (TypesOptions, RegisterOptions) {
    if let Some(library) = &args.library {
        types.library_path.clone_from(library);
        register.library_path.clone_from(library);
    }
    if let Some(container) = &args.container_type {
        types.container_type.clone_from(container);
        register.container_type.clone_from(container);
    }
    if let Some(context) = &args.context_type {
        types.context_type.clone_from(context);
        register.context_type.clone_from(context);
    }
    if let Some(module) = &args.types_module {
        register.types_module.clone_from(module);
    }
    (types, register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(services: &[&str]) -> GenerateArgs {
        GenerateArgs {
            services: services.iter().map(|s| s.to_string()).collect(),
            ..GenerateArgs::default()
        }
    }

    fn write_config(dir: &Path, name: &str) {
        fs::write(
            dir.join(name),
            r#"{
                "output": "from-config",
                "services": [ { "name": "cache", "interface": "ICache" } ],
                "types": { "libraryPath": "tsyringe" }
            }"#,
        )
        .unwrap();
    }

    #[test]
    fn nothing_to_do_without_input() {
        let dir = tempfile::tempdir().unwrap();
        let run = resolve(&args(&[]), None, dir.path()).unwrap();
        assert_eq!(run.source, ServiceSource::Nothing);
        assert!(run.generator.services().is_empty());
        assert_eq!(run.generator.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn discovered_config_supplies_services() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "digen.json");

        let run = resolve(&args(&[]), None, dir.path()).unwrap();
        assert_eq!(
            run.source,
            ServiceSource::ConfigFile(dir.path().join("digen.json"))
        );
        assert_eq!(run.generator.services()[0].interface(), "ICache");
        assert_eq!(run.generator.output_dir(), Path::new("from-config"));
        assert_eq!(run.generator.types_options().library_path, "tsyringe");
    }

    #[test]
    fn command_line_services_win() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "digen.config.json");

        let run = resolve(&args(&["mailer:IMailTransport"]), None, dir.path()).unwrap();
        assert_eq!(run.source, ServiceSource::CommandLine);
        assert_eq!(run.generator.services().len(), 1);
        assert_eq!(run.generator.services()[0].name(), "mailer");
        // The document still provides the output directory.
        assert_eq!(run.generator.output_dir(), Path::new("from-config"));
    }

    #[test]
    fn flags_override_document() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "digen.json");

        let mut run_args = args(&[]);
        run_args.output = Some(PathBuf::from("flag-out"));
        run_args.library = Some("inversify".into());
        run_args.types_module = Some("../types".into());

        let run = resolve(&run_args, None, dir.path()).unwrap();
        assert_eq!(run.generator.output_dir(), Path::new("flag-out"));
        assert_eq!(run.generator.types_options().library_path, "inversify");
        assert_eq!(run.generator.register_options().library_path, "inversify");
        assert_eq!(run.generator.register_options().types_module, "../types");
    }

    #[test]
    fn explicit_config_is_relative_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "custom.json");

        let run = resolve(&args(&[]), Some(Path::new("custom.json")), dir.path()).unwrap();
        assert_eq!(run.generator.services().len(), 1);
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(&args(&[]), Some(Path::new("absent.json")), dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bad_service_spec_is_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(&args(&["a:b:c"]), None, dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.to_string().contains("a:b:c"));
        assert_eq!(err.exit_code(), 2);
    }
}
