//! Flags accepted before or after any subcommand.

use clap::{ArgAction, Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Flattened into [`super::Cli`]; every field is `global = true`.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug (with worker thread names), `-vvv` trace.
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        global = true,
        help = "More log output (repeat for more)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. Also set by `NO_COLOR` unless it is `0`, `false` or `off`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Never emit ANSI colours"
    )]
    pub no_color: bool,

    /// Config document to read instead of the discovered one.
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "FILE",
        env = "DIGEN_CONFIG",
        help = "Config file (default: digen.config.json, digen.json or .digenrc.json)"
    )]
    pub config: Option<PathBuf>,
}
