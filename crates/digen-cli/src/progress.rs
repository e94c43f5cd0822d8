//! Progress bar for generation runs.

use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use digen_core::application::{FileKind, GenerationObserver};
use digen_core::error::DigenError;

use crate::output::OutputManager;

const COLORED_TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";
const PLAIN_TEMPLATE: &str = "[{bar:30}] {pos}/{len} {wide_msg}";

/// Advances a bar once per written file.
///
/// Hidden in quiet mode and when stderr is not a terminal.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new(output: &OutputManager) -> Self {
        if output.is_quiet() || !std::io::stderr().is_terminal() {
            return Self::hidden();
        }

        let template = if output.supports_color() {
            COLORED_TEMPLATE
        } else {
            PLAIN_TEMPLATE
        };
        let bar = ProgressBar::new(0);
        // Templates are constants; a bad one just keeps the default style.
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl GenerationObserver for ProgressObserver {
    fn on_start(&self, files: usize) {
        self.bar.set_length(files as u64);
    }

    fn on_file_written(&self, service: &str, kind: FileKind, path: &Path) {
        let label = match kind {
            FileKind::SharedTypes => "types",
            FileKind::Registration => "register",
        };
        self.bar
            .set_message(format!("{service} {label} {}", path.display()));
        self.bar.inc(1);
    }

    fn on_service_failed(&self, service: &str, _error: &DigenError) {
        self.bar.set_message(format!("{service} failed"));
    }

    fn on_finish(&self) {
        self.bar.finish_and_clear();
    }
}
