//! Error handling for the Project Analyzer
//!
//! Every error in this module is fatal for a run. Per-file read failures are
//! not errors here: they are reported inside the document through
//! [`crate::models::FileAnalysis::Unreadable`].

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{AnalyzerError, Result};
