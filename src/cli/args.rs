//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Project Analyzer - Markdown snapshot of a project's files and imports
#[derive(Parser, Debug)]
#[command(name = "project-analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze a project directory and create a summary document.")]
#[command(long_about = "Scans a project directory and writes project_analysis.md to the current directory. \
The report contains an indented directory tree and, for JavaScript, TypeScript, Python, HTML, CSS, JSON \
and Markdown files, the import-like lines and the first 25 lines of content. \
Directories such as node_modules, .git, dist and build are skipped entirely.")]
#[command(after_help = "EXAMPLES:

    # Analyze the current directory
    project-analyzer

    # Analyze another project; the report still lands in the current directory
    project-analyzer ../my-app
")]
pub struct Args {
    /// The root directory of the project to analyze
    #[arg(value_name = "DIRECTORY", default_value = ".", help = "The root directory of the project to analyze. Defaults to the current directory.")]
    pub directory: PathBuf,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
