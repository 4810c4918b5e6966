//! Edit scripts: a JSON list of structural operations applied in order.
//!
//! Scripts let a batch run reproduce an editing session without a front
//! end. Title-cell operations use the same `(row, col)` addressing as the
//! interactive API; resizes name a band directly.
//!
//! ```json
//! [
//!     { "op": "insert", "row": 0, "col": 1 },
//!     { "op": "resize", "axis": "column", "index": 1, "offset": 80.0 },
//!     { "op": "remove", "row": 2, "col": 0 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use swimlane::geometry::Axis;

use crate::error::CliError;

/// One structural edit in a script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Insert a lane after the one named by the title cell at `(row, col)`.
    Insert { row: usize, col: usize },
    /// Remove the lane named by the title cell at `(row, col)`.
    Remove { row: usize, col: usize },
    /// Move the seam at the far edge of band `index` by `offset` pixels.
    Resize {
        axis: Axis,
        index: usize,
        offset: f32,
    },
}

/// Loads and parses an edit script file.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::Script`] if it is not a valid script.
pub fn load_script(path: &Path) -> Result<Vec<EditOp>, CliError> {
    let source = fs::read_to_string(path)?;
    serde_json::from_str(&source).map_err(|err| CliError::Script(err.to_string()))
}
