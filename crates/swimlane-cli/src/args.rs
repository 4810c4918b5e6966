//! Command-line argument definitions for the swimlane CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the swimlane layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an existing layout file (JSON cell list); a fresh grid is
    /// synthesized when omitted
    #[arg(help = "Path to an existing layout file")]
    pub layout: Option<String>,

    /// Path to an edit script (JSON) applied to the layout
    #[arg(short, long)]
    pub script: Option<String>,

    /// Path to the output layout file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
