//! Detailed file analysis section
//!
//! For each analyzable file the report shows the lines that look like
//! imports and the first few raw lines of content. Import detection is a
//! fixed textual heuristic shared by every language: a trimmed line counts
//! if it starts with `import ` or `from `, or contains `require(` anywhere.
//! It is not a parser and over- and under-matches by construction.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::walker::DirWalker;
use crate::error::Result;
use crate::models::{AnalysisSummary, FileAnalysis};
use crate::output::formatters::{format_file_section, ANALYSIS_HEADER};
use crate::output::ReportWriter;
use crate::utils::path::extension_of;

/// Whether a single line looks like an import statement
pub fn is_import_like(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("import ") || line.starts_with("from ") || line.contains("require(")
}

/// Import-like lines, trimmed, in order
pub fn extract_imports<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| is_import_like(line))
        .map(str::to_string)
        .collect()
}

/// Split into lines, keeping each line's `\n`.
///
/// `\r\n` and lone `\r` are treated as line breaks and become `\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Analyzes files and writes their report subsections
pub struct FileAnalyzer<'a> {
    settings: &'a Settings,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Read one file and collect its imports and preview.
    ///
    /// Never fails: a file that cannot be read yields
    /// [`FileAnalysis::Unreadable`].
    pub fn analyze_file(&self, path: &Path) -> FileAnalysis {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read file");
                return FileAnalysis::Unreadable {
                    message: err.to_string(),
                };
            }
        };

        let lines = split_lines(&self.settings.rules.decoding.decode(&bytes));
        let imports = extract_imports(&lines);
        let preview = lines.into_iter().take(self.settings.rules.preview_lines).collect();

        FileAnalysis::Analyzed { imports, preview }
    }

    /// Append the detailed analysis section, reporting each analyzed file
    pub fn write_analysis_with_progress<W, F>(&self, out: &mut ReportWriter<W>, mut progress: F) -> Result<AnalysisSummary>
    where
        W: Write,
        F: FnMut(&str),
    {
        info!(root = %self.settings.scan_root.display(), "writing detailed file analysis");

        let root = &self.settings.scan_root;
        let rules = &self.settings.rules;
        let mut summary = AnalysisSummary::default();

        out.write_str(ANALYSIS_HEADER)?;

        let walker = DirWalker::new(root, rules).skipping_file(&self.settings.output_file);
        for listing in walker.walk() {
            let listing = listing?;
            summary.directories += 1;

            for file_name in &listing.files {
                summary.files_seen += 1;

                let extension = extension_of(file_name);
                if !rules.is_analyzable(&extension) {
                    continue;
                }

                let path = listing.path.join(file_name);
                let relative = path.strip_prefix(root).unwrap_or(&path).display().to_string();
                debug!(file = %relative, "analyzing");
                progress(&relative);

                let analysis = self.analyze_file(&path);
                summary.record(&analysis);
                out.write_str(&format_file_section(&relative, &extension, &analysis, rules.preview_lines))?;
            }
        }

        Ok(summary)
    }
}
