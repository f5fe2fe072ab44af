//! Project Analyzer - a Markdown snapshot generator for source trees
//!
//! This library walks a project directory, renders an indented directory tree
//! and, for recognized source and text files, lists import-like statements
//! together with a short content preview. Everything is written to a single
//! Markdown report.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use config::{ScanRules, Settings, TextDecoding};
pub use crate::core::{DirWalker, FileAnalyzer, ProjectReport, TreeBuilder};
pub use error::{AnalyzerError, Result, ResultExt};
pub use models::{AnalysisSummary, DirListing, FileAnalysis};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
