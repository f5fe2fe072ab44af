//! Error context utilities

use crate::error::{AnalyzerError, Result};
use std::path::Path;

/// Extension trait for IO results to attach the path being worked on
pub trait ResultExt<T> {
    /// Convert an IO error into an [`AnalyzerError::PathIo`] for `path`
    fn with_path_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| AnalyzerError::path_io_error(path.as_ref(), err))
    }
}
