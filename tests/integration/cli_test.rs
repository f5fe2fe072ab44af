use clap::Parser;
use project_analyzer::cli::args::Args;
use std::path::PathBuf;

#[test]
fn test_cli_default_directory() {
    let args = Args::parse_from(["project-analyzer"]);
    assert_eq!(args.directory, PathBuf::from("."));
}

#[test]
fn test_cli_positional_directory() {
    let args = Args::parse_from(["project-analyzer", "../my-app"]);
    assert_eq!(args.directory, PathBuf::from("../my-app"));
}

#[test]
fn test_cli_rejects_unknown_flags() {
    assert!(Args::try_parse_from(["project-analyzer", "--exclude", "dist"]).is_err());
}

#[test]
fn test_cli_rejects_extra_positionals() {
    assert!(Args::try_parse_from(["project-analyzer", "a", "b"]).is_err());
}

#[test]
fn test_cli_help_is_builtin() {
    let err = Args::try_parse_from(["project-analyzer", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
