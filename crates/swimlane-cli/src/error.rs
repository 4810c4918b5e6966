//! Error types for the swimlane CLI.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use swimlane::SwimlaneError;

/// Errors surfaced by the CLI with miette diagnostics attached.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(swimlane::cli::io))]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(swimlane::cli::config),
        help("Check the TOML configuration file for syntax or unknown fields")
    )]
    Config(String),

    #[error("Layout file error: {0}")]
    #[diagnostic(
        code(swimlane::cli::layout),
        help("The layout file must contain the JSON cell list written by a previous run")
    )]
    Layout(String),

    #[error("Edit script error: {0}")]
    #[diagnostic(
        code(swimlane::cli::script),
        help("The script is a JSON array of {{\"op\": ...}} objects")
    )]
    Script(String),

    #[error(transparent)]
    #[diagnostic(code(swimlane::cli::engine))]
    Engine(#[from] SwimlaneError),
}
