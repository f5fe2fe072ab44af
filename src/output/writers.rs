//! Output writing functionality

use crate::error::{AnalyzerError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only sink for the report.
///
/// Write failures are reported against `path` so a fatal error names the
/// report that was left incomplete.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an arbitrary writer; `path` is only used in error messages
    pub fn new(inner: W, path: impl AsRef<Path>) -> Self {
        Self {
            inner,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append text to the report
    pub fn write_str(&mut self, content: &str) -> Result<()> {
        self.inner
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(|e| self.write_error(e))?;
        Ok(self.inner)
    }

    fn write_error(&self, source: std::io::Error) -> AnalyzerError {
        AnalyzerError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Create (or truncate) the report file behind a buffered writer
pub fn create_report_file(path: impl AsRef<Path>) -> Result<ReportWriter<BufWriter<File>>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| AnalyzerError::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ReportWriter::new(BufWriter::new(file), path))
}
