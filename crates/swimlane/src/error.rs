//! Error types for swimlane grid operations.
//!
//! Out-of-range access and dimension mismatches indicate integration errors
//! and propagate to the caller. [`SwimlaneError::IllegalRange`] is the one
//! expected, recoverable outcome: the seam cannot move in the requested
//! direction and the caller must refuse or cancel the drag without mutating
//! the grid.

use thiserror::Error;

use swimlane_core::geometry::Axis;

/// The main error type for swimlane grid operations.
#[derive(Debug, Error)]
pub enum SwimlaneError {
    /// Cell access outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A structural edit named a row or column boundary that does not exist,
    /// or one that cannot be edited (the title strip at index 0, or a
    /// removal that would drop the grid below its 2x2 minimum).
    #[error("{axis} {index} is not a valid edit boundary (extent {extent})")]
    LaneOutOfRange {
        axis: Axis,
        index: usize,
        extent: usize,
    },

    /// An inserted row or column does not match the grid's other extent.
    #[error("inserted {axis} has {actual} cells, expected {expected}")]
    DimensionMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// The resize range for a seam collapsed: embedded content forces a
    /// minimum past the maximum, so the drag must not start.
    #[error("{axis} {index} cannot be resized: min {min} exceeds max {max}")]
    IllegalRange {
        axis: Axis,
        index: usize,
        min: f32,
        max: f32,
    },

    /// Insert/remove was requested at an index that is not on the title
    /// strip. Structural edits only enter through title cells.
    #[error("({row}, {col}) is not a title cell; structural edits enter through the title strip")]
    NotATitleCell { row: usize, col: usize },

    /// A flat cell list could not be reconstructed into a grid.
    #[error("malformed layout: {0}")]
    MalformedLayout(String),
}
