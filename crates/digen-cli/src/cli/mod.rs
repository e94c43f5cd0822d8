//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "digen",
    bin_name = "digen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Dependency-injection boilerplate generator",
    long_about = "digen writes a shared types module and a registration module \
                  for every service you name, ready to plug into a typed \
                  dependency-injection container.",
    after_help = "EXAMPLES:\n\
        \x20 digen generate userService logger\n\
        \x20 digen generate mailer:IMailTransport -o src/services\n\
        \x20 digen init && digen generate\n\
        \x20 digen completions bash > /usr/share/bash-completion/completions/digen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate service files.
    #[command(
        visible_alias = "g",
        about = "Generate types and registration files",
        after_help = "EXAMPLES:\n\
            \x20 digen generate userService                 # interface IUserService\n\
            \x20 digen generate cache:ICacheStore -j 4\n\
            \x20 digen generate --dry-run                   # services from digen.config.json"
    )]
    Generate(GenerateArgs),

    /// Write a starter config document.
    #[command(
        about = "Create digen.config.json in the current directory",
        after_help = "EXAMPLES:\n\
            \x20 digen init\n\
            \x20 digen init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 digen completions bash > ~/.local/share/bash-completion/completions/digen\n\
            \x20 digen completions zsh  > ~/.zfunc/_digen\n\
            \x20 digen completions fish > ~/.config/fish/completions/digen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `digen generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Services as `name` or `name:Interface`. When given, the services in
    /// the config document are ignored.
    #[arg(value_name = "SERVICE", help = "Services to generate (name[:Interface])")]
    pub services: Vec<String>,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: config 'output', else ./services)"
    )]
    pub output: Option<PathBuf>,

    /// Worker threads for registration files.
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Maximum concurrent writers (default: available CPUs)"
    )]
    pub jobs: Option<u16>,

    /// Module the container type is imported from.
    #[arg(long = "library", value_name = "PATH", help = "Container library import path")]
    pub library: Option<String>,

    #[arg(long = "container-type", value_name = "TYPE", help = "Container type name")]
    pub container_type: Option<String>,

    #[arg(long = "context-type", value_name = "TYPE", help = "Typed container alias name")]
    pub context_type: Option<String>,

    #[arg(
        long = "types-module",
        value_name = "PATH",
        help = "Module path of the shared types, relative to a registration file"
    )]
    pub types_module: Option<String>,

    /// Preview the files without writing them.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `digen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `digen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
