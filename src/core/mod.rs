//! Core functionality: directory walking and the two report stages

pub mod analyzer;
pub mod report;
pub mod tree;
pub mod walker;

pub use analyzer::FileAnalyzer;
pub use report::ProjectReport;
pub use tree::TreeBuilder;
pub use walker::DirWalker;
