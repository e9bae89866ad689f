/// Scan progress display using an indicatif spinner.
///
/// The total number of files is unknown until the walk ends, so the scan
/// phase shows a spinner with running counters rather than a bar. indicatif
/// draws to stderr and stays silent when stderr is not a terminal.
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ScanSpinner {
    bar: ProgressBar,
}

impl ScanSpinner {
    /// Spinner drawn on stderr, ticking on its own while the scan runs.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_message("Scanning files...");
        Self { bar }
    }

    /// Show the latest running totals.
    pub fn update(&self, files_found: u64, skipped: u64, current_path: &str) {
        self.bar.set_message(format!(
            "Scanning... {files_found} files found, {skipped} skipped ({current_path})"
        ));
    }

    /// Remove the spinner once the scan has ended, however it ended.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ScanSpinner {
    fn default() -> Self {
        Self::new()
    }
}
