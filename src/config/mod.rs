//! Scan configuration
//!
//! The analyzer has no runtime configuration beyond the directory to scan.
//! The rules below are fixed at construction time and injected into the
//! walker and both report stages.

pub mod settings;

pub use settings::{Settings, SettingsValidator};

/// Fixed name of the generated report, written to the current directory
pub const REPORT_FILE_NAME: &str = "project_analysis.md";

/// Directory names pruned, with their whole subtree, wherever they occur
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "build",
    "__pycache__",
    ".next",
    // Usually static assets with no logic in them
    "public",
    "assets",
];

/// Extensions (leading dot included) of files that get a detailed section
pub const ANALYZABLE_EXTENSIONS: &[&str] = &[
    // JavaScript / TypeScript
    ".js", ".jsx", ".ts", ".tsx",
    ".py",
    // Web
    ".html", ".css",
    ".json",
    ".md",
];

/// Number of leading lines shown in a content preview
pub const PREVIEW_LINE_LIMIT: usize = 25;

/// How file bytes that are not valid UTF-8 are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoding {
    /// Invalid sequences are silently removed
    #[default]
    Drop,
    /// Invalid sequences become U+FFFD
    Replace,
}

impl TextDecoding {
    /// Decode `bytes` as UTF-8 without ever failing
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextDecoding::Replace => String::from_utf8_lossy(bytes).into_owned(),
            TextDecoding::Drop => {
                let mut text = String::with_capacity(bytes.len());
                for chunk in bytes.utf8_chunks() {
                    text.push_str(chunk.valid());
                }
                text
            }
        }
    }
}

/// Immutable traversal and analysis rules
#[derive(Debug, Clone)]
pub struct ScanRules {
    pub excluded_dirs: Vec<String>,
    pub analyzable_extensions: Vec<String>,
    pub preview_lines: usize,
    pub decoding: TextDecoding,
}

impl ScanRules {
    /// Whether a directory basename is pruned from traversal
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Whether files with this extension (dot included) are analyzed
    pub fn is_analyzable(&self, extension: &str) -> bool {
        !extension.is_empty() && self.analyzable_extensions.iter().any(|e| e == extension)
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            analyzable_extensions: ANALYZABLE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            preview_lines: PREVIEW_LINE_LIMIT,
            decoding: TextDecoding::default(),
        }
    }
}
