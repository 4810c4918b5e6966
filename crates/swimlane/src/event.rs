//! Typed layout-change notification.
//!
//! The lane emits exactly one [`LayoutChanged`] per committed structural
//! edit, synchronously, after reconciliation has closed its host batch. No
//! partial state is ever observable: subscribers see the grid only between
//! operations. This replaces wiring the engine into an ambient graph-wide
//! event bus; the integration layer subscribes here instead.

use swimlane_core::geometry::Axis;

use crate::grid::Grid;

/// Which structural edit was committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditKind {
    /// A row or column was inserted after `index`.
    Insert { axis: Axis, index: usize },
    /// The row or column at `index` was removed.
    Remove { axis: Axis, index: usize },
    /// The seam at the far edge of band `index` moved by `offset`.
    Resize {
        axis: Axis,
        index: usize,
        offset: f32,
    },
}

/// A committed structural change, carrying the updated grid.
#[derive(Debug)]
pub struct LayoutChanged<'g> {
    grid: &'g Grid,
    edit: EditKind,
}

impl<'g> LayoutChanged<'g> {
    pub(crate) fn new(grid: &'g Grid, edit: EditKind) -> Self {
        Self { grid, edit }
    }

    /// Returns the grid after the edit.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Returns the edit that was committed.
    pub fn edit(&self) -> EditKind {
        self.edit
    }
}
