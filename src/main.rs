use std::process::ExitCode;

use project_analyzer::{
    cli::Args,
    config::Settings,
    core::ProjectReport,
    error::{AnalyzerError, Result},
    output::ProgressReporter,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse_args();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::from_current_dir(&args.directory)?;

    let mut reporter = ProgressReporter::new(false);
    reporter.start(&settings.scan_root, &settings.output_file);

    let report = ProjectReport::new(settings);
    let summary = report.write_file(&mut reporter)?;

    reporter.finish(&summary, &report.settings().output_file);

    Ok(())
}

fn report_error(err: &AnalyzerError) {
    eprintln!("\nError: {}", err.user_message());

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }
}
