//! Configuration file discovery and loading.
//!
//! The lane configuration is read from a TOML file. An explicitly passed
//! path must exist; otherwise the platform configuration directory is
//! probed, and the built-in defaults apply when no file is found.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::{debug, info};

use swimlane::LaneConfig;

use crate::error::CliError;

/// Loads the lane configuration.
///
/// # Errors
///
/// Returns [`CliError::Config`] if an explicit path does not exist, or if
/// any discovered file fails to parse.
pub fn load_config(explicit: Option<&String>) -> Result<LaneConfig, CliError> {
    if let Some(path) = explicit {
        let source = fs::read_to_string(path)
            .map_err(|err| CliError::Config(format!("cannot read {path}: {err}")))?;
        info!(path; "Loaded configuration");
        return parse(&source, path);
    }

    if let Some(path) = platform_config_path() {
        if path.exists() {
            let display = path.display().to_string();
            let source = fs::read_to_string(&path)
                .map_err(|err| CliError::Config(format!("cannot read {display}: {err}")))?;
            info!(path = display; "Loaded configuration");
            return parse(&source, &display);
        }
    }

    debug!("No configuration file found, using defaults");
    Ok(LaneConfig::default())
}

fn parse(source: &str, path: &str) -> Result<LaneConfig, CliError> {
    toml::from_str(source).map_err(|err| CliError::Config(format!("{path}: {err}")))
}

fn platform_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "swimlane", "swimlane")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
