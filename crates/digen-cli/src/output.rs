//! Output management and formatting.
//!
//! Status lines go to stdout; errors go to stderr so they stay visible when
//! stdout is piped.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Writes user-facing status lines.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build from parsed CLI flags. Colour is off when stdout is not a TTY.
    pub fn new(args: &GlobalArgs) -> Self {
        Self::with_options(args.quiet, args.no_color || !io::stdout().is_terminal())
    }

    pub fn with_options(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.decorate('\u{2713}', msg, Tone::Success))
    }

    /// Error indicator: `✗ <msg>`. Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.err.write_line(&self.decorate('\u{2717}', msg, Tone::Error))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.decorate('\u{26a0}', msg, Tone::Warning))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.decorate('\u{2139}', msg, Tone::Info))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.out.write_line(&line)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn decorate(&self, symbol: char, msg: &str, tone: Tone) -> String {
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        let symbol = symbol.to_string();
        match tone {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Tone::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decoration_has_no_ansi() {
        let out = OutputManager::with_options(false, true);
        assert_eq!(out.decorate('\u{2713}', "done", Tone::Success), "\u{2713} done");
    }

    #[test]
    fn colored_decoration_keeps_message() {
        let out = OutputManager::with_options(false, false);
        let line = out.decorate('\u{2717}', "broken", Tone::Error);
        assert!(line.contains("broken"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::with_options(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
        assert!(out.success("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(OutputManager::with_options(false, false).supports_color());
        assert!(!OutputManager::with_options(false, true).supports_color());
    }
}
