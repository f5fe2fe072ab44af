//! Analysis-related data structures

use std::ffi::OsString;
use std::path::PathBuf;

/// One directory visited by the walker, after pruning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Absolute path of the directory
    pub path: PathBuf,
    /// Levels below the scan root (the root itself is 0)
    pub depth: usize,
    /// Subdirectory names that will be descended into, sorted
    pub subdirs: Vec<OsString>,
    /// File names, sorted. Kept as raw OS names so they can be reopened;
    /// lossy conversion happens only when rendering.
    pub files: Vec<OsString>,
}

impl DirListing {
    /// Basename of the directory, empty for a filesystem root
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of reading a single analyzable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAnalysis {
    /// The file was read
    Analyzed {
        /// Import-like lines, trimmed, in file order
        imports: Vec<String>,
        /// Leading raw lines, line terminators included
        preview: Vec<String>,
    },
    /// The file could not be read at all
    Unreadable {
        message: String,
    },
}

impl FileAnalysis {
    /// Import lines as rendered in the report.
    ///
    /// An unreadable file renders as a single error line.
    pub fn import_lines(&self) -> Vec<String> {
        match self {
            FileAnalysis::Analyzed { imports, .. } => imports.clone(),
            FileAnalysis::Unreadable { message } => vec![format!("Error reading file: {}", message)],
        }
    }

    /// Preview lines as rendered in the report
    pub fn preview_lines(&self) -> &[String] {
        match self {
            FileAnalysis::Analyzed { preview, .. } => preview,
            FileAnalysis::Unreadable { .. } => &[],
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileAnalysis::Unreadable { .. })
    }
}

/// Counters collected while writing the detailed analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    /// Directories visited after pruning
    pub directories: usize,
    /// Files seen in visited directories
    pub files_seen: usize,
    /// Files that received a subsection
    pub files_analyzed: usize,
    /// Analyzed files that could not be read
    pub files_unreadable: usize,
}

impl AnalysisSummary {
    /// Record the outcome of one analyzed file
    pub fn record(&mut self, analysis: &FileAnalysis) {
        self.files_analyzed += 1;
        if analysis.is_unreadable() {
            self.files_unreadable += 1;
        }
    }
}
