//! CLI logic for the swimlane layout tool.
//!
//! Loads or synthesizes a swimlane grid, applies an optional edit script
//! against a detached host, and writes the resulting cell list as JSON.

pub mod error;

mod args;
mod config;
mod script;

pub use args::Args;
pub use error::CliError;

use std::fs;
use std::path::Path;

use log::{debug, info};

use swimlane::{
    DetachedHost, LaneConfig, ResizeRequest, SwimLane,
    cell::{Cell, CellIndex},
};

use crate::script::EditOp;

/// Run the swimlane CLI application
///
/// Builds the lane (from a layout file or from configuration), applies
/// the edit script if one was given, and writes the output layout.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed layout or script files
/// - Structural edits the engine refuses
pub fn run(args: &Args) -> Result<(), CliError> {
    let lane_config = config::load_config(args.config.as_ref())?;

    let mut lane = match &args.layout {
        Some(path) => {
            info!(layout_path = path; "Loading layout");
            load_layout(Path::new(path), lane_config)?
        }
        None => {
            info!("Synthesizing fresh layout");
            SwimLane::new(lane_config)
        }
    };

    let mut host = DetachedHost::new();
    if let Some(path) = &args.script {
        let ops = script::load_script(Path::new(path))?;
        info!(script_path = path, ops = ops.len(); "Applying edit script");
        for op in ops {
            apply(&mut lane, &mut host, op)?;
        }
    }

    let cells = lane.grid().to_cells();
    let json = serde_json::to_string_pretty(&cells)
        .map_err(|err| CliError::Layout(err.to_string()))?;
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        rows = lane.grid().rows(),
        cols = lane.grid().cols();
        "Layout exported successfully"
    );

    Ok(())
}

fn load_layout(path: &Path, config: LaneConfig) -> Result<SwimLane, CliError> {
    let source = fs::read_to_string(path)?;
    let cells: Vec<Cell> =
        serde_json::from_str(&source).map_err(|err| CliError::Layout(err.to_string()))?;
    Ok(SwimLane::from_cells(config, cells)?)
}

fn apply(
    lane: &mut SwimLane,
    host: &mut DetachedHost,
    op: EditOp,
) -> Result<(), CliError> {
    debug!(op:?; "Applying edit");
    match op {
        EditOp::Insert { row, col } => lane.insert_at(host, CellIndex::new(row, col))?,
        EditOp::Remove { row, col } => lane.remove_at(host, CellIndex::new(row, col))?,
        EditOp::Resize {
            axis,
            index,
            offset,
        } => lane.resize(host, ResizeRequest::new(axis, index, offset))?,
    }
    Ok(())
}
