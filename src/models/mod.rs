//! Data structures passed between the walker, the analyzer and the report

pub mod analysis;

pub use analysis::{AnalysisSummary, DirListing, FileAnalysis};
