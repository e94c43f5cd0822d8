//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `digen-core` and `digen-adapters`
//! only emit spans and events.
//!
//! | Flags      | Level |
//! |------------|-------|
//! | (none)     | warn  |
//! | `-v`       | info  |
//! | `-vv`      | debug |
//! | `-vvv`     | trace |
//! | `--quiet`  | error |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the flag-derived level.
const DIGEN_TARGETS: [&str; 3] = ["digen", "digen_core", "digen_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        // digen-worker-N identifies the registration writer.
        .with_thread_names(args.verbose >= 2);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    DIGEN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_table() {
        let cases = [
            (0, false, LevelFilter::WARN),
            (1, false, LevelFilter::INFO),
            (2, false, LevelFilter::DEBUG),
            (3, false, LevelFilter::TRACE),
            (9, false, LevelFilter::TRACE),
            (0, true, LevelFilter::ERROR),
            // quiet wins even if both reach here programmatically
            (3, true, LevelFilter::ERROR),
        ];
        for (verbose, quiet, expected) in cases {
            let args = GlobalArgs {
                verbose,
                quiet,
                ..GlobalArgs::default()
            };
            assert_eq!(level_for(&args), expected, "-v x{verbose}, quiet={quiet}");
        }
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = directives(LevelFilter::DEBUG);
        assert!(directives.eq_ignore_ascii_case("digen=debug,digen_core=debug,digen_adapters=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
