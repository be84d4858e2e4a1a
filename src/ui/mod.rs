//! Progress presentation layer
//!
//! The bundler reports every file it writes through the [`ProgressReporter`]
//! trait. The interactive reporter draws an indicatif spinner on stderr (it
//! stays hidden when stderr is not a terminal); the silent one is used for
//! `--quiet` and in tests.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a bundling run
pub trait ProgressReporter {
    /// A file is about to be written to the bundle
    fn update_file(&mut self, display_path: &str);

    /// The run completed
    fn finish(&mut self);

    /// The run failed
    fn abandon(&mut self);
}

/// Spinner with a running file count
pub struct InteractiveProgressReporter {
    pb: ProgressBar,
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {pos} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);

        Self { pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn update_file(&mut self, display_path: &str) {
        // Keep the line short on narrow terminals
        let shown = if display_path.chars().count() > 50 {
            let tail: String = display_path
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            display_path.to_string()
        };
        self.pb.set_message(shown);
        self.pb.inc(1);
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn update_file(&mut self, _display_path: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
