//! Error types and definitions for the Project Analyzer

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analyzer operations
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO errors tied to a specific path
    #[error("IO error at {path}: {source}")]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root does not exist
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// The scan root exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The working directory could not be determined
    #[error("Cannot determine the current directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {source}")]
    DirectoryTraversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The report file could not be created
    #[error("Error creating output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AnalyzerError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            AnalyzerError::NotADirectory { path } => {
                format!("'{}' is not a directory. Please provide a directory to analyze.", path.display())
            }
            AnalyzerError::DirectoryTraversal { path, source } => {
                if source.io_error().map(|e| e.kind()) == Some(std::io::ErrorKind::PermissionDenied) {
                    format!("Cannot read directory '{}' due to permission denied.", path.display())
                } else {
                    format!("Failed to read directory '{}': {}", path.display(), source)
                }
            }
            AnalyzerError::OutputCreate { path, source } => {
                format!("Cannot create report '{}': {}", path.display(), source)
            }
            AnalyzerError::OutputWrite { path, source } => {
                format!("Failed while writing report '{}': {}. The report may be incomplete.", path.display(), source)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Get a hint for resolving the error, if one applies
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AnalyzerError::InvalidPath { .. } | AnalyzerError::NotADirectory { .. } => {
                Some("Check that the path exists and is accessible")
            }
            AnalyzerError::DirectoryTraversal { .. } => {
                Some("Check directory permissions or run from a location you can read")
            }
            AnalyzerError::OutputCreate { .. } | AnalyzerError::OutputWrite { .. } => {
                Some("Run from a writable directory with enough free space")
            }
            _ => None,
        }
    }

    /// Create an IO error attached to a path
    pub fn path_io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::PathIo {
            path: path.into(),
            source,
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        AnalyzerError::DirectoryTraversal {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
