//! Report formatting, writing and console progress

pub mod formatters;
mod progress;
mod writers;

pub use self::progress::ProgressReporter;
pub use self::writers::{create_report_file, ReportWriter};
