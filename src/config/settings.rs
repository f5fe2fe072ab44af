//! Run settings and validation

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{ScanRules, REPORT_FILE_NAME};
use crate::error::{AnalyzerError, Result, ResultExt};
use crate::utils::path::normalize;

/// Everything a single run needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute, normalized directory to scan
    pub scan_root: PathBuf,

    /// Absolute path of the report file
    pub output_file: PathBuf,

    /// Traversal and analysis rules
    pub rules: ScanRules,
}

impl Settings {
    /// Resolve `directory` against `cwd` and place the report in `cwd`
    pub fn resolve(directory: &Path, cwd: &Path) -> Result<Self> {
        let settings = Self {
            scan_root: normalize(&cwd.join(directory)),
            output_file: normalize(&cwd.join(REPORT_FILE_NAME)),
            rules: ScanRules::default(),
        };

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }

    /// Resolve `directory` against the process working directory
    pub fn from_current_dir(directory: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|source| AnalyzerError::CurrentDir { source })?;
        Self::resolve(directory, &cwd)
    }

    /// Replace the scan rules
    pub fn with_rules(mut self, rules: ScanRules) -> Self {
        self.rules = rules;
        self
    }

    /// Basename of the scan root, used in the report title
    pub fn project_name(&self) -> String {
        self.scan_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Settings validator for ensuring the run can start
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        let root = &settings.scan_root;

        let metadata = match fs::metadata(root) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AnalyzerError::InvalidPath { path: root.clone() });
            }
            other => other.with_path_context(root)?,
        };

        if !metadata.is_dir() {
            return Err(AnalyzerError::NotADirectory { path: root.clone() });
        }

        Ok(())
    }
}
