//! The swimlane aggregate and its layout controller.
//!
//! [`SwimLane`] owns exactly one [`Grid`] plus the configuration it was
//! built from, and is the only component that mutates the grid: structural
//! edits enter here, the grid cascades coordinates, and the changed cell
//! set is reconciled against the host's visual nodes inside one batch. The
//! range calculator and any interactive front end get read-only views.
//!
//! Structural edits enter through the title strip: users grow and shrink a
//! swimlane from its titles, so `insert_at`/`remove_at` take a title cell
//! index and infer the direction from which coordinate is zero.

use log::{debug, info};

use swimlane_core::{
    cell::{Cell, CellIndex},
    geometry::{Axis, Rect},
};

use crate::{
    config::LaneConfig,
    drag::DragSession,
    error::SwimlaneError,
    event::{EditKind, LayoutChanged},
    grid::Grid,
    host::GraphHost,
    range::{self, ResizeRange},
};

/// A seam move request: the band at `index` along `axis` grows by `offset`,
/// every later band shifts by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    axis: Axis,
    index: usize,
    offset: f32,
}

impl ResizeRequest {
    /// Creates a new resize request.
    pub fn new(axis: Axis, index: usize, offset: f32) -> Self {
        Self {
            axis,
            index,
            offset,
        }
    }

    /// Returns the axis the seam moves along.
    pub fn axis(self) -> Axis {
        self.axis
    }

    /// Returns the band whose far edge is the seam.
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the seam displacement in pixels.
    pub fn offset(self) -> f32 {
        self.offset
    }
}

/// Builds the grid a fresh swimlane starts from: a title strip plus the
/// configured number of content lanes per axis.
pub(crate) fn synthesize_grid(config: &LaneConfig) -> Grid {
    let (lane_rows, lane_cols) = config.lanes();
    let rows = lane_rows + 1;
    let cols = lane_cols + 1;
    let data = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    Cell::for_index(
                        CellIndex::new(i, j),
                        config.cell_rect(i, j),
                        config.title_label(),
                    )
                })
                .collect()
        })
        .collect();
    Grid::from_rows(data)
}

type Listener = Box<dyn FnMut(&LayoutChanged<'_>)>;

/// The swimlane diagram: one grid, its configuration, and the subscribers
/// notified after each committed edit.
pub struct SwimLane {
    config: LaneConfig,
    grid: Grid,
    listeners: Vec<Listener>,
}

impl SwimLane {
    /// Creates a swimlane with a freshly synthesized grid.
    pub fn new(config: LaneConfig) -> Self {
        let grid = synthesize_grid(&config);
        info!(rows = grid.rows(), cols = grid.cols(); "Synthesized swimlane grid");
        Self {
            config,
            grid,
            listeners: Vec::new(),
        }
    }

    /// Reconstructs a swimlane from a persisted flat cell list.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::MalformedLayout`] if the list does not
    /// describe a well-formed grid.
    pub fn from_cells(config: LaneConfig, cells: Vec<Cell>) -> Result<Self, SwimlaneError> {
        let grid = Grid::from_cells(cells)?;
        info!(rows = grid.rows(), cols = grid.cols(); "Reconstructed swimlane grid");
        Ok(Self {
            config,
            grid,
            listeners: Vec::new(),
        })
    }

    /// Returns a read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the lane configuration.
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// Returns the bounding box of the whole swimlane.
    pub fn bounding_box(&self) -> Rect {
        self.grid.bounding_box()
    }

    /// Registers a listener for committed layout changes. Notifications are
    /// synchronous, one per committed operation.
    pub fn subscribe(&mut self, listener: impl FnMut(&LayoutChanged<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Inserts a row or column after the lane named by a title cell: a cell
    /// on the title row inserts a column, a cell on the title column inserts
    /// a row. The new lane clones the adjacent lane's cross-axis geometry
    /// and takes the configured default size along the growth axis.
    ///
    /// # Errors
    ///
    /// [`SwimlaneError::NotATitleCell`] off the title strip,
    /// [`SwimlaneError::LaneOutOfRange`] past the grid's extent.
    pub fn insert_at(
        &mut self,
        host: &mut dyn GraphHost,
        index: CellIndex,
    ) -> Result<(), SwimlaneError> {
        let (axis, band) = edit_direction(index)?;
        info!(axis:%, band; "Inserting lane");

        let cells = self.clone_band(axis, band)?;
        match axis {
            Axis::Row => self.grid.insert_row(band, cells)?,
            Axis::Column => self.grid.insert_col(band, cells)?,
        }

        let updated = self.band_indices(axis, band + 1);
        self.reconcile(host, "swimlane-insert", updated, Vec::new())?;
        self.notify(EditKind::Insert { axis, index: band });
        Ok(())
    }

    /// Removes the lane named by a title cell, with the same direction
    /// inference as [`SwimLane::insert_at`]. The removed cells' host nodes
    /// are deleted (cascading to nested content) during reconciliation;
    /// confirmation for non-empty lanes is the caller's business, the
    /// engine deletes unconditionally once invoked.
    ///
    /// # Errors
    ///
    /// [`SwimlaneError::NotATitleCell`] off the title strip,
    /// [`SwimlaneError::LaneOutOfRange`] for the title strip itself or a
    /// removal that would drop the grid below 2x2.
    pub fn remove_at(
        &mut self,
        host: &mut dyn GraphHost,
        index: CellIndex,
    ) -> Result<(), SwimlaneError> {
        let (axis, band) = edit_direction(index)?;
        info!(axis:%, band; "Removing lane");

        let removed = match axis {
            Axis::Row => self.grid.remove_row(band)?,
            Axis::Column => self.grid.remove_col(band)?,
        };

        let updated = self.band_indices(axis, band);
        self.reconcile(host, "swimlane-remove", updated, removed)?;
        self.notify(EditKind::Remove { axis, index: band });
        Ok(())
    }

    /// Applies a seam move and reconciles every touched band.
    ///
    /// # Errors
    ///
    /// [`SwimlaneError::LaneOutOfRange`] for a band that does not exist.
    pub fn resize(
        &mut self,
        host: &mut dyn GraphHost,
        request: ResizeRequest,
    ) -> Result<(), SwimlaneError> {
        let ResizeRequest {
            axis,
            index,
            offset,
        } = request;
        info!(axis:%, index, offset; "Resizing lane");

        self.grid.resize_band(axis, index, offset)?;

        let updated = self.band_indices(axis, index);
        self.reconcile(host, "swimlane-resize", updated, Vec::new())?;
        self.notify(EditKind::Resize {
            axis,
            index,
            offset,
        });
        Ok(())
    }

    /// Computes the legal drag range for the seam at the far edge of band
    /// `index`.
    ///
    /// # Errors
    ///
    /// See [`crate::ResizeRange`]: out-of-range bands and collapsed ranges
    /// are rejected.
    pub fn compute_range(
        &self,
        host: &dyn GraphHost,
        axis: Axis,
        index: usize,
    ) -> Result<ResizeRange, SwimlaneError> {
        range::compute_range(&self.grid, &self.config, host, axis, index)
    }

    /// Whether any host node in the lane through `index` carries nested
    /// content. For a content cell the column wins, matching the title
    /// strip's own orientation rules.
    pub fn has_embedded_content(&self, host: &dyn GraphHost, index: CellIndex) -> bool {
        let cells = if index.col() > 0 {
            self.grid.slice_cols(index.col(), Some(index.col() + 1))
        } else if index.row() > 0 {
            self.grid.slice_rows(index.row(), Some(index.row() + 1))
        } else {
            return false;
        };
        let Ok(cells) = cells else {
            return false;
        };
        cells
            .iter()
            .filter_map(|cell| cell.external_id())
            .any(|id| host.has_children(id))
    }

    /// Arms an interactive seam drag: computes the legal range, captures
    /// the seam origin, and hands back the session. The session mutably
    /// borrows the lane, so only one drag can exist at a time.
    ///
    /// # Errors
    ///
    /// Propagates range computation failures; in particular a collapsed
    /// range refuses the drag before it starts.
    pub fn begin_drag(
        &mut self,
        host: &dyn GraphHost,
        axis: Axis,
        index: usize,
    ) -> Result<DragSession<'_>, SwimlaneError> {
        let range = self.compute_range(host, axis, index)?;
        let origin = self.grid.seam_position(axis, index)?;
        debug!(axis:%, index, origin; "Armed seam drag");
        Ok(DragSession::new(self, axis, index, range, origin))
    }

    /// Builds the cells of a new lane after `band`: cross-axis geometry is
    /// cloned from the adjacent lane, the growth axis takes the default
    /// lane size, and coordinates along the growth axis are left for the
    /// cascade to stamp.
    fn clone_band(&self, axis: Axis, band: usize) -> Result<Vec<Cell>, SwimlaneError> {
        match axis {
            Axis::Row => (0..self.grid.cols())
                .map(|j| {
                    let template = self.grid.get(band, j)?;
                    Ok(Cell::for_index(
                        CellIndex::new(band + 1, j),
                        Rect::new(
                            template.x(),
                            template.y(),
                            template.width(),
                            self.config.lane_height(),
                        ),
                        self.config.title_label(),
                    ))
                })
                .collect(),
            Axis::Column => (0..self.grid.rows())
                .map(|i| {
                    let template = self.grid.get(i, band)?;
                    Ok(Cell::for_index(
                        CellIndex::new(i, band + 1),
                        Rect::new(
                            template.x(),
                            template.y(),
                            self.config.lane_width(),
                            template.height(),
                        ),
                        self.config.title_label(),
                    ))
                })
                .collect(),
        }
    }

    /// Indices of every cell in bands `from..` along `axis`, in row-major
    /// order. This is the changed set a structural edit must reconcile.
    fn band_indices(&self, axis: Axis, from: usize) -> Vec<CellIndex> {
        let mut indices = Vec::new();
        match axis {
            Axis::Row => {
                for i in from..self.grid.rows() {
                    for j in 0..self.grid.cols() {
                        indices.push(CellIndex::new(i, j));
                    }
                }
            }
            Axis::Column => {
                for i in 0..self.grid.rows() {
                    for j in from..self.grid.cols() {
                        indices.push(CellIndex::new(i, j));
                    }
                }
            }
        }
        indices
    }

    /// Matches the changed cell set against host nodes: removed cells lose
    /// their nodes, unmaterialized cells get one (the id is stamped back
    /// into the grid), existing nodes are repositioned with their nested
    /// content translated by the same delta. The whole pass runs inside one
    /// host batch.
    fn reconcile(
        &mut self,
        host: &mut dyn GraphHost,
        batch: &str,
        updated: Vec<CellIndex>,
        removed: Vec<Cell>,
    ) -> Result<(), SwimlaneError> {
        debug!(batch, updated = updated.len(), removed = removed.len(); "Reconciling cells");
        host.begin_batch(batch);

        for cell in &removed {
            if let Some(id) = cell.external_id() {
                host.delete_node(id);
            }
        }

        for index in updated {
            let cell = self.grid.get(index.row(), index.col())?.clone();
            match cell.external_id() {
                Some(id) => {
                    if let Some(old) = host.node_bounds(id) {
                        let dx = cell.x() - old.x();
                        let dy = cell.y() - old.y();
                        if (dx != 0.0 || dy != 0.0) && host.has_children(id) {
                            host.translate_children(id, dx, dy);
                        }
                    }
                    host.update_node(id, cell.rect());
                }
                None => {
                    let id = host.create_node(&cell);
                    self.grid
                        .get_mut(index.row(), index.col())?
                        .set_external_id(Some(id));
                }
            }
        }

        host.end_batch(batch);
        Ok(())
    }

    fn notify(&mut self, edit: EditKind) {
        let event = LayoutChanged::new(&self.grid, edit);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

/// Infers the edit direction from a title cell index: a title on row 0
/// names a column, a title on column 0 names a row. The blank corner and
/// content cells are not edit entry points.
fn edit_direction(index: CellIndex) -> Result<(Axis, usize), SwimlaneError> {
    match (index.row(), index.col()) {
        (0, 0) => Err(SwimlaneError::NotATitleCell { row: 0, col: 0 }),
        (0, col) => Ok((Axis::Column, col)),
        (row, 0) => Ok((Axis::Row, row)),
        (row, col) => Err(SwimlaneError::NotATitleCell { row, col }),
    }
}
