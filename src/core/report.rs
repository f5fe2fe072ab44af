//! Report orchestration: title, tree, then detailed analysis

use std::io::Write;

use tracing::info;

use crate::config::Settings;
use crate::core::{FileAnalyzer, TreeBuilder};
use crate::error::Result;
use crate::models::AnalysisSummary;
use crate::output::formatters::format_title;
use crate::output::{create_report_file, ProgressReporter, ReportWriter};

/// A complete report run over one scan root
pub struct ProjectReport {
    settings: Settings,
}

impl ProjectReport {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Write the whole document to `out`
    pub fn write_to<W: Write>(&self, out: &mut ReportWriter<W>, reporter: &ProgressReporter) -> Result<AnalysisSummary> {
        out.write_str(&format_title(&self.settings.project_name()))?;

        TreeBuilder::new(&self.settings).write_tree(out)?;

        FileAnalyzer::new(&self.settings).write_analysis_with_progress(out, |file| reporter.file(file))
    }

    /// Create the report file, write the document and flush it.
    ///
    /// The file is closed when this returns, on success or failure. After a
    /// failure it may hold a partial report.
    pub fn write_file(&self, reporter: &mut ProgressReporter) -> Result<AnalysisSummary> {
        let mut out = create_report_file(&self.settings.output_file)?;

        reporter.begin_files();
        let result = self
            .write_to(&mut out, reporter)
            .and_then(|summary| out.finish().map(|_| summary));
        reporter.end_files();
        let summary = result?;

        info!(
            report = %self.settings.output_file.display(),
            analyzed = summary.files_analyzed,
            unreadable = summary.files_unreadable,
            "report written"
        );

        Ok(summary)
    }
}
