//! Implementation of the `digen generate` command.
//!
//! Responsibility: resolve the run configuration, call the core generation
//! service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use digen_adapters::LocalFilesystem;
use digen_core::application::{GenerationReport, GenerationService};
use digen_core::domain::GeneratorConfig;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::{self, ServiceSource},
    error::{CliResult, IntoCli},
    output::OutputManager,
    progress::ProgressObserver,
};

/// Execute the `digen generate` command.
///
/// 1. Resolve services, output directory and options
/// 2. Early-exit when there is nothing to generate
/// 3. `--dry-run`: list the planned files
/// 4. Otherwise write everything and report per-service failures
#[instrument(skip_all, fields(services = args.services.len(), dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let run = config::resolve(&args, global.config.as_deref(), &cwd)?;
    let config = run.generator;

    if let ServiceSource::ConfigFile(path) = &run.source {
        output.info(&format!("Using services from {}", display_relative(path, &cwd)))?;
    }

    if config.services().is_empty() {
        output.warning(
            "No services to generate: pass SERVICE arguments or create one with 'digen init'",
        )?;
        return Ok(());
    }

    let mut service = GenerationService::new(Box::new(LocalFilesystem::new()));
    if let Some(jobs) = args.jobs {
        service = service.with_parallelism(usize::from(jobs));
    }

    if args.dry_run {
        return print_plan(&service, &config, output);
    }

    let service = service.with_observer(Box::new(ProgressObserver::new(output)));

    output.header(&format!(
        "Generating {} services into {}",
        config.services().len(),
        config.output_dir().display()
    ))?;

    let report = service
        .generate_all(&config)
        .with_cli_context(|| "generation run")?;

    print_report(&report, output)?;
    report.into_result()?;

    info!("Generation completed");
    Ok(())
}

fn print_plan(
    service: &GenerationService,
    config: &GeneratorConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let files = service.plan(config)?;
    output.info(&format!(
        "Dry run: would write {} files for {} services",
        files.len(),
        config.services().len()
    ))?;
    for file in &files {
        output.print(&format!("  {}", file.path.display()))?;
    }
    Ok(())
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for failure in report.failures() {
        output.error(&format!("{}: {}", failure.service, failure.error))?;
    }

    let written = report.written().len();
    if report.is_complete() {
        output.success(&format!(
            "Generated {written} files for {} services",
            report.services()
        ))?;
    } else {
        output.warning(&format!(
            "Generated {written} files; {} of {} services failed",
            report.failures().len(),
            report.services()
        ))?;
    }
    Ok(())
}

fn display_relative(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}
