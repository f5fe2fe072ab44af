//! Console progress reporting
//!
//! Informational only: nothing printed here is part of the report.

use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use crate::models::AnalysisSummary;

/// Progress reporter for a report run
pub struct ProgressReporter {
    quiet: bool,
    use_colors: bool,
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; colors are used only when stdout is a terminal
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            use_colors: std::io::stdout().is_terminal(),
            spinner: None,
        }
    }

    /// A reporter that prints nothing
    pub fn silent() -> Self {
        Self::new(true)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_colors {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Announce the scan root and the report location
    pub fn start(&self, scan_root: &Path, output_file: &Path) {
        if self.quiet {
            return;
        }

        println!(
            "{} {}",
            self.paint(Cyan.bold(), "Starting analysis of project at:"),
            scan_root.display()
        );
        println!(
            "{} {}",
            self.paint(Cyan.bold(), "Output will be written to:"),
            output_file.display()
        );
    }

    /// Begin showing per-file progress on stderr
    pub fn begin_files(&mut self) {
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Show the file currently being analyzed
    pub fn file(&self, relative_path: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Analyzing {}", relative_path));
        }
    }

    /// Stop showing per-file progress
    pub fn end_files(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Clear the spinner and print the closing lines
    pub fn finish(&mut self, summary: &AnalysisSummary, output_file: &Path) {
        self.end_files();

        if self.quiet {
            return;
        }

        println!("\n{}", self.paint(Green.bold(), "Analysis complete!"));
        println!(
            "Analyzed {} of {} files in {} directories.",
            summary.files_analyzed, summary.files_seen, summary.directories
        );
        if summary.files_unreadable > 0 {
            println!(
                "{}",
                self.paint(
                    Yellow.normal(),
                    &format!("{} file(s) could not be read; see the report for details.", summary.files_unreadable)
                )
            );
        }
        println!(
            "Please open the '{}' file, copy its contents, and paste them in our chat.",
            output_file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        );
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
