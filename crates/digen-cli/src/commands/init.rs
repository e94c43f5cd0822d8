//! `digen init`: write a starter config document.

use tracing::{debug, instrument};

use digen_adapters::{ConfigDocument, DEFAULT_CONFIG_FILES};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create `digen.config.json` in the current directory.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let config_path = cwd.join(DEFAULT_CONFIG_FILES[0]);

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let mut json = ConfigDocument::example().to_json()?;
    json.push('\n');

    std::fs::write(&config_path, &json).with_cli_context(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;
    debug!(path = %config_path.display(), bytes = json.len(), "Starter config written");

    output.success(&format!("Created {}", DEFAULT_CONFIG_FILES[0]))?;
    output.print("Edit the services list, then run: digen generate")?;
    Ok(())
}
