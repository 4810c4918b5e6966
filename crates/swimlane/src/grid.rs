//! The 2-D cell matrix and its coordinate cascade.
//!
//! [`Grid`] owns the rectangular `rows x cols` storage of [`Cell`]s and is
//! the only place structural mutation happens. Every insert or removal ends
//! with a cascade pass that re-derives the absolute coordinate and storage
//! index of every downstream cell, so the invariants hold after each
//! operation:
//!
//! 1. Storage stays rectangular.
//! 2. A cell's carried index always equals its storage position.
//! 3. For a fixed column, `y` grows row by row and each row starts at the
//!    previous row's bottom edge; symmetric for `x` along columns.
//! 4. The corner cell (0, 0) is blank.
//!
//! The cascade is O(rows * cols) per structural edit. Edits are user-paced,
//! so that cost is fine.

use log::trace;

use swimlane_core::{
    cell::{Cell, CellIndex, CellKind},
    geometry::{Axis, Rect},
};

use crate::error::SwimlaneError;

/// A rectangular matrix of cells, at least 2x2.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid directly from row-major storage. Callers guarantee the
    /// rows are rectangular and the cells carry their storage indices.
    pub(crate) fn from_rows(data: Vec<Vec<Cell>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        debug_assert!(rows >= 2 && cols >= 2);
        debug_assert!(data.iter().all(|row| row.len() == cols));
        Self { rows, cols, data }
    }

    /// Reconstructs a grid from a flat cell list, the persisted layout
    /// shape. Dimensions come from the largest carried index.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::MalformedLayout`] if the list is empty,
    /// smaller than 2x2, not rectangular, carries a duplicate index, or is
    /// missing the blank corner cell.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, SwimlaneError> {
        let malformed = |msg: String| SwimlaneError::MalformedLayout(msg);

        let rows = cells
            .iter()
            .map(|c| c.index().row())
            .max()
            .map(|r| r + 1)
            .ok_or_else(|| malformed("empty cell list".to_owned()))?;
        let cols = cells
            .iter()
            .map(|c| c.index().col())
            .max()
            .map(|c| c + 1)
            .unwrap_or(0);

        if rows < 2 || cols < 2 {
            return Err(malformed(format!("grid must be at least 2x2, got {rows}x{cols}")));
        }
        if cells.len() != rows * cols {
            return Err(malformed(format!(
                "expected {} cells for a {rows}x{cols} grid, got {}",
                rows * cols,
                cells.len()
            )));
        }

        let mut slots: Vec<Vec<Option<Cell>>> = vec![vec![None; cols]; rows];
        for cell in cells {
            let index = cell.index();
            let slot = &mut slots[index.row()][index.col()];
            if slot.is_some() {
                return Err(malformed(format!("duplicate cell at {index}")));
            }
            *slot = Some(cell);
        }

        // The length check plus the duplicate check leave no empty slot.
        let data: Vec<Vec<Cell>> = slots
            .into_iter()
            .map(|row| row.into_iter().collect::<Option<Vec<Cell>>>())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed("cell list does not cover the grid".to_owned()))?;

        if data[0][0].kind() != CellKind::Blank {
            return Err(malformed("corner cell (0, 0) must be blank".to_owned()));
        }

        Ok(Self { rows, cols, data })
    }

    /// Returns the number of rows, title strip included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns, title strip included.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), SwimlaneError> {
        if row >= self.rows || col >= self.cols {
            return Err(SwimlaneError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.cols,
        }
    }

    fn check_band(&self, axis: Axis, index: usize) -> Result<(), SwimlaneError> {
        if index >= self.extent(axis) {
            return Err(SwimlaneError::LaneOutOfRange {
                axis,
                index,
                extent: self.extent(axis),
            });
        }
        Ok(())
    }

    /// Returns the cell at a storage position.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::CellOutOfBounds`] outside
    /// `[0, rows) x [0, cols)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, SwimlaneError> {
        self.check_cell(row, col)?;
        Ok(&self.data[row][col])
    }

    /// Mutable access to the cell at a storage position.
    ///
    /// # Errors
    ///
    /// Same bound check as [`Grid::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, SwimlaneError> {
        self.check_cell(row, col)?;
        Ok(&mut self.data[row][col])
    }

    /// Replaces the cell at a storage position in place.
    ///
    /// # Errors
    ///
    /// Same bound check as [`Grid::get`].
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), SwimlaneError> {
        self.check_cell(row, col)?;
        self.data[row][col] = cell;
        Ok(())
    }

    /// Returns a row-major flat view of the rows in `[start, end)`. With no
    /// `end`, the slice runs to the last row; `start` at the row count
    /// yields the empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::LaneOutOfRange`] if `end` exceeds the row
    /// count or `start` exceeds `end`.
    pub fn slice_rows(
        &self,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<&Cell>, SwimlaneError> {
        let end = end.unwrap_or(self.rows);
        if end > self.rows || start > end {
            return Err(SwimlaneError::LaneOutOfRange {
                axis: Axis::Row,
                index: start.max(end),
                extent: self.rows,
            });
        }
        Ok(self.data[start..end].iter().flatten().collect())
    }

    /// Returns a row-major flat view of the columns in `[start, end)`. With
    /// no `end`, the slice runs to the last column.
    ///
    /// # Errors
    ///
    /// Symmetric to [`Grid::slice_rows`].
    pub fn slice_cols(
        &self,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<&Cell>, SwimlaneError> {
        let end = end.unwrap_or(self.cols);
        if end > self.cols || start > end {
            return Err(SwimlaneError::LaneOutOfRange {
                axis: Axis::Column,
                index: start.max(end),
                extent: self.cols,
            });
        }
        Ok(self
            .data
            .iter()
            .flat_map(|row| &row[start..end])
            .collect())
    }

    /// Inserts a row immediately after `after` and cascades coordinates
    /// from `after` downward.
    ///
    /// # Errors
    ///
    /// [`SwimlaneError::LaneOutOfRange`] for an invalid boundary,
    /// [`SwimlaneError::DimensionMismatch`] if `cells` does not span the
    /// grid's columns.
    pub fn insert_row(&mut self, after: usize, cells: Vec<Cell>) -> Result<(), SwimlaneError> {
        self.check_band(Axis::Row, after)?;
        if cells.len() != self.cols {
            return Err(SwimlaneError::DimensionMismatch {
                axis: Axis::Row,
                expected: self.cols,
                actual: cells.len(),
            });
        }
        self.data.insert(after + 1, cells);
        self.rows += 1;
        self.cascade_rows(after);
        trace!(after, rows = self.rows; "Inserted row");
        Ok(())
    }

    /// Inserts a column immediately after `after` and cascades coordinates
    /// from `after` rightward.
    ///
    /// # Errors
    ///
    /// Symmetric to [`Grid::insert_row`]; `cells` must span the grid's rows.
    pub fn insert_col(&mut self, after: usize, cells: Vec<Cell>) -> Result<(), SwimlaneError> {
        self.check_band(Axis::Column, after)?;
        if cells.len() != self.rows {
            return Err(SwimlaneError::DimensionMismatch {
                axis: Axis::Column,
                expected: self.rows,
                actual: cells.len(),
            });
        }
        for (row, cell) in self.data.iter_mut().zip(cells) {
            row.insert(after + 1, cell);
        }
        self.cols += 1;
        self.cascade_cols(after);
        trace!(after, cols = self.cols; "Inserted column");
        Ok(())
    }

    /// Removes a row and returns its cells for the caller to reconcile.
    /// Coordinates cascade from the row before the removed one.
    ///
    /// # Errors
    ///
    /// [`SwimlaneError::LaneOutOfRange`] for the title row at index 0, an
    /// index past the end, or a removal that would leave fewer than 2 rows.
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<Cell>, SwimlaneError> {
        self.check_band(Axis::Row, index)?;
        if index == 0 || self.rows == 2 {
            return Err(SwimlaneError::LaneOutOfRange {
                axis: Axis::Row,
                index,
                extent: self.rows,
            });
        }
        let removed = self.data.remove(index);
        self.rows -= 1;
        self.cascade_rows(index - 1);
        trace!(index, rows = self.rows; "Removed row");
        Ok(removed)
    }

    /// Removes a column and returns its cells, top to bottom.
    ///
    /// # Errors
    ///
    /// Symmetric to [`Grid::remove_row`].
    pub fn remove_col(&mut self, index: usize) -> Result<Vec<Cell>, SwimlaneError> {
        self.check_band(Axis::Column, index)?;
        if index == 0 || self.cols == 2 {
            return Err(SwimlaneError::LaneOutOfRange {
                axis: Axis::Column,
                index,
                extent: self.cols,
            });
        }
        let removed = self
            .data
            .iter_mut()
            .map(|row| row.remove(index))
            .collect();
        self.cols -= 1;
        self.cascade_cols(index - 1);
        trace!(index, cols = self.cols; "Removed column");
        Ok(removed)
    }

    /// Moves the seam at the far edge of band `index`: the band itself
    /// grows by `offset`, every later band shifts by `offset`. Sizes past
    /// the seam are untouched.
    pub(crate) fn resize_band(
        &mut self,
        axis: Axis,
        index: usize,
        offset: f32,
    ) -> Result<(), SwimlaneError> {
        self.check_band(axis, index)?;
        match axis {
            Axis::Row => {
                for (i, row) in self.data.iter_mut().enumerate().skip(index) {
                    for cell in row {
                        if i == index {
                            cell.grow_height(offset);
                        } else {
                            cell.shift_y(offset);
                        }
                    }
                }
            }
            Axis::Column => {
                for row in &mut self.data {
                    for (j, cell) in row.iter_mut().enumerate().skip(index) {
                        if j == index {
                            cell.grow_width(offset);
                        } else {
                            cell.shift_x(offset);
                        }
                    }
                }
            }
        }
        trace!(axis:%, index, offset; "Moved seam");
        Ok(())
    }

    /// Visits every cell in row-major order without mutating.
    pub fn traverse(&self, mut visitor: impl FnMut(&Cell, usize, usize)) {
        for (i, row) in self.data.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                visitor(cell, i, j);
            }
        }
    }

    /// Returns a row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter().flatten()
    }

    /// Returns an owned row-major snapshot, the persisted layout shape.
    pub fn to_cells(&self) -> Vec<Cell> {
        self.iter().cloned().collect()
    }

    /// Returns the bounding box of the whole grid.
    pub fn bounding_box(&self) -> Rect {
        let first = self.data[0][0].rect();
        let last = self.data[self.rows - 1][self.cols - 1].rect();
        first.union(&last)
    }

    /// Canonical height of a row, read from its first cell.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::LaneOutOfRange`] past the last row.
    pub fn row_height(&self, row: usize) -> Result<f32, SwimlaneError> {
        self.check_band(Axis::Row, row)?;
        Ok(self.data[row][0].height())
    }

    /// Canonical width of a column, read from its first cell.
    ///
    /// # Errors
    ///
    /// Returns [`SwimlaneError::LaneOutOfRange`] past the last column.
    pub fn col_width(&self, col: usize) -> Result<f32, SwimlaneError> {
        self.check_band(Axis::Column, col)?;
        Ok(self.data[0][col].width())
    }

    /// Absolute position of the seam at the far edge of band `index`.
    pub(crate) fn seam_position(&self, axis: Axis, index: usize) -> Result<f32, SwimlaneError> {
        self.check_band(axis, index)?;
        Ok(match axis {
            Axis::Row => self.data[index][0].rect().bottom(),
            Axis::Column => self.data[0][index].rect().right(),
        })
    }

    /// Re-derives `y` and the storage index for every row after `from`.
    /// The running offset starts at the bottom edge of row `from` and
    /// advances by each row's canonical height.
    fn cascade_rows(&mut self, from: usize) {
        let base = self.data[from][0].rect();
        let mut offset = base.bottom();
        for i in (from + 1)..self.rows {
            for (j, cell) in self.data[i].iter_mut().enumerate() {
                cell.set_index(CellIndex::new(i, j));
                cell.set_y(offset);
            }
            offset += self.data[i][0].height();
        }
    }

    /// Re-derives `x` and the storage index for every column after `from`.
    fn cascade_cols(&mut self, from: usize) {
        let base = self.data[0][from].rect();
        let mut offset = base.right();
        for j in (from + 1)..self.cols {
            for i in 0..self.rows {
                let cell = &mut self.data[i][j];
                cell.set_index(CellIndex::new(i, j));
                cell.set_x(offset);
            }
            offset += self.data[0][j].width();
        }
    }
}

#[cfg(test)]
mod tests {
    use swimlane_core::geometry::Point;

    use super::*;
    use crate::config::LaneConfig;
    use crate::lane::synthesize_grid;

    fn grid() -> Grid {
        synthesize_grid(&LaneConfig::default())
    }

    fn new_row(grid: &Grid, reference: usize, height: f32) -> Vec<Cell> {
        (0..grid.cols())
            .map(|j| {
                let template = grid.get(reference, j).expect("reference cell");
                Cell::for_index(
                    CellIndex::new(reference + 1, j),
                    Rect::new(template.x(), template.y(), template.width(), height),
                    "Untitled",
                )
            })
            .collect()
    }

    fn new_col(grid: &Grid, reference: usize, width: f32) -> Vec<Cell> {
        (0..grid.rows())
            .map(|i| {
                let template = grid.get(i, reference).expect("reference cell");
                Cell::for_index(
                    CellIndex::new(i, reference + 1),
                    Rect::new(template.x(), template.y(), width, template.height()),
                    "Untitled",
                )
            })
            .collect()
    }

    /// Checks the structural invariants: rectangular storage, carried
    /// indices matching storage positions, adjacent bands meeting exactly.
    pub(crate) fn assert_invariants(grid: &Grid) {
        assert!(grid.rows() >= 2 && grid.cols() >= 2);
        for i in 0..grid.rows() {
            for j in 0..grid.cols() {
                let cell = grid.get(i, j).expect("cell in range");
                assert_eq!(cell.index(), CellIndex::new(i, j));
                if i + 1 < grid.rows() {
                    let below = grid.get(i + 1, j).expect("cell below");
                    assert!(cell.y() <= below.y());
                    assert_eq!(below.y(), cell.rect().bottom());
                }
                if j + 1 < grid.cols() {
                    let right = grid.get(i, j + 1).expect("cell to the right");
                    assert!(cell.x() <= right.x());
                    assert_eq!(right.x(), cell.rect().right());
                }
            }
        }
        assert!(grid.get(0, 0).expect("corner").is_blank());
    }

    #[test]
    fn test_synthesized_geometry() {
        let grid = grid();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_invariants(&grid);

        let corner = grid.get(0, 0).expect("corner");
        assert_eq!(corner.rect(), Rect::new(100.0, 100.0, 100.0, 40.0));

        let first_content = grid.get(1, 1).expect("content");
        assert_eq!(first_content.rect(), Rect::new(200.0, 140.0, 300.0, 300.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = grid();
        let err = grid.get(3, 0).expect_err("row out of range");
        assert!(matches!(err, SwimlaneError::CellOutOfBounds { row: 3, .. }));
        let err = grid.get(0, 7).expect_err("col out of range");
        assert!(matches!(err, SwimlaneError::CellOutOfBounds { col: 7, .. }));
    }

    #[test]
    fn test_set_replaces_cell_in_place() {
        let mut grid = grid();
        let mut cell = grid.get(0, 1).expect("title").clone();
        cell.set_label("Reviews");
        grid.set(0, 1, cell).expect("set");

        assert_eq!(grid.get(0, 1).expect("title").label(), "Reviews");
        assert!(grid.set(5, 5, grid.get(0, 0).expect("corner").clone()).is_err());
    }

    #[test]
    fn test_slice_rows_full_extent_default() {
        let grid = grid();
        let band = grid.slice_rows(1, None).expect("slice");
        assert_eq!(band.len(), 6);
        assert!(band.iter().all(|c| c.index().row() >= 1));
    }

    #[test]
    fn test_slice_cols_band() {
        let grid = grid();
        let band = grid.slice_cols(1, Some(2)).expect("slice");
        assert_eq!(band.len(), 3);
        assert!(band.iter().all(|c| c.index().col() == 1));
    }

    #[test]
    fn test_slice_at_extent_is_empty() {
        let grid = grid();
        assert!(grid.slice_rows(3, None).expect("empty slice").is_empty());
        assert!(grid.slice_cols(3, None).expect("empty slice").is_empty());
        assert!(grid.slice_rows(1, Some(1)).expect("empty slice").is_empty());
    }

    #[test]
    fn test_slice_bad_bounds_fail() {
        let grid = grid();
        assert!(grid.slice_rows(0, Some(4)).is_err());
        assert!(grid.slice_cols(4, None).is_err());
        assert!(grid.slice_rows(2, Some(1)).is_err());
    }

    #[test]
    fn test_insert_row_cascades() {
        let mut grid = grid();
        let cells = new_row(&grid, 1, 120.0);
        grid.insert_row(1, cells).expect("insert row");

        assert_eq!(grid.rows(), 4);
        assert_invariants(&grid);

        // New row sits at the old boundary below row 1.
        let inserted = grid.get(2, 0).expect("inserted title");
        assert_eq!(inserted.y(), 440.0);
        assert_eq!(inserted.height(), 120.0);

        // The old row 2 shifted down by exactly the inserted height.
        let shifted = grid.get(3, 1).expect("shifted content");
        assert_eq!(shifted.y(), 440.0 + 120.0);
    }

    #[test]
    fn test_insert_col_after_last() {
        let mut grid = grid();
        let cells = new_col(&grid, 2, 300.0);
        grid.insert_col(2, cells).expect("insert col");

        assert_eq!(grid.cols(), 4);
        assert_invariants(&grid);

        // The new column starts at the old grid's right edge.
        let inserted = grid.get(1, 3).expect("inserted content");
        assert_eq!(inserted.x(), 800.0);
    }

    #[test]
    fn test_insert_dimension_mismatch() {
        let mut grid = grid();
        let mut cells = new_row(&grid, 1, 300.0);
        cells.pop();
        let err = grid.insert_row(1, cells).expect_err("short row");
        assert!(matches!(
            err,
            SwimlaneError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_remove_row_returns_cells_and_shrinks() {
        let mut grid = grid();
        let removed = grid.remove_row(2).expect("remove row");

        assert_eq!(removed.len(), 3);
        assert!(removed.iter().all(|c| c.index().row() == 2));
        assert_eq!(grid.rows(), 2);
        assert_invariants(&grid);
        assert!(grid.get(2, 0).is_err());
    }

    #[test]
    fn test_remove_title_band_rejected() {
        let mut grid = grid();
        assert!(matches!(
            grid.remove_row(0),
            Err(SwimlaneError::LaneOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            grid.remove_col(0),
            Err(SwimlaneError::LaneOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_remove_below_structural_minimum_rejected() {
        let mut grid = grid();
        grid.remove_row(2).expect("first removal");
        let err = grid.remove_row(1).expect_err("would leave one row");
        assert!(matches!(err, SwimlaneError::LaneOutOfRange { .. }));
    }

    #[test]
    fn test_insert_then_remove_restores_coordinates() {
        let mut grid = grid();
        let before = grid.to_cells();

        let cells = new_row(&grid, 1, 180.0);
        grid.insert_row(1, cells).expect("insert");
        grid.remove_row(2).expect("remove");

        assert_eq!(grid.to_cells(), before);
    }

    #[test]
    fn test_resize_band_moves_seam_only() {
        let mut grid = grid();
        grid.resize_band(Axis::Column, 1, 50.0).expect("resize");

        assert_invariants(&grid);
        assert_eq!(grid.col_width(1).expect("width"), 350.0);
        assert_eq!(grid.get(0, 2).expect("title").x(), 550.0);
        assert_eq!(grid.get(1, 2).expect("content").x(), 550.0);
        // Column 0 untouched.
        assert_eq!(grid.get(0, 0).expect("corner").rect(),
            Rect::new(100.0, 100.0, 100.0, 40.0));
        // Downstream sizes untouched.
        assert_eq!(grid.col_width(2).expect("width"), 300.0);
    }

    #[test]
    fn test_traverse_row_major() {
        let grid = grid();
        let mut visited = Vec::new();
        grid.traverse(|cell, i, j| {
            assert_eq!(cell.index(), CellIndex::new(i, j));
            visited.push((i, j));
        });
        assert_eq!(visited.len(), 9);
        assert_eq!(visited[0], (0, 0));
        assert_eq!(visited[4], (1, 1));
        assert_eq!(visited[8], (2, 2));
    }

    #[test]
    fn test_bounding_box() {
        let grid = grid();
        let bbox = grid.bounding_box();
        assert_eq!(bbox.origin(), Point::new(100.0, 100.0));
        assert_eq!(bbox.right(), 800.0);
        assert_eq!(bbox.bottom(), 740.0);
    }

    #[test]
    fn test_from_cells_roundtrip() {
        let grid = grid();
        let rebuilt = Grid::from_cells(grid.to_cells()).expect("rebuild");
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_from_cells_rejects_gap() {
        let mut cells = grid().to_cells();
        cells.pop();
        assert!(matches!(
            Grid::from_cells(cells),
            Err(SwimlaneError::MalformedLayout(_))
        ));
    }

    #[test]
    fn test_from_cells_rejects_duplicate_index() {
        let mut cells = grid().to_cells();
        let clone = cells[4].clone();
        *cells.last_mut().expect("last cell") = clone;
        assert!(matches!(
            Grid::from_cells(cells),
            Err(SwimlaneError::MalformedLayout(_))
        ));
    }

    #[test]
    fn test_from_cells_rejects_missing_blank_corner() {
        let mut cells = grid().to_cells();
        let rect = cells[0].rect();
        cells[0] = Cell::title(CellIndex::new(0, 0), rect, "not blank");
        assert!(matches!(
            Grid::from_cells(cells),
            Err(SwimlaneError::MalformedLayout(_))
        ));
    }
}
