//! The cell data model.
//!
//! A swimlane grid is a rectangular matrix of [`Cell`]s: a title strip along
//! row 0 and column 0, content cells at the lane intersections, and a blank
//! placeholder at the corner. This module defines the cell record along with
//! its identity ([`CellIndex`]), its classification ([`CellKind`]), and the
//! non-owning back-reference to an externally-owned visual node ([`NodeId`]).
//!
//! A flat `Vec<Cell>` is the persisted shape of a layout: every cell carries
//! its own index and absolute geometry, so the sequence alone reconstructs
//! the grid exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A cell's position in the grid's 2-D storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    row: usize,
    col: usize,
}

impl CellIndex {
    /// Creates a new index.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row component.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column component.
    pub fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a cell is, decided once at construction.
///
/// The classification is an explicit tag rather than something inferred from
/// an external identifier: a cell on row 0 or column 0 is a title, the
/// origin corner is the blank placeholder, everything else is lane content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// The corner placeholder at index (0, 0).
    Blank,
    /// A row or column title on the grid's title strip.
    Title,
    /// A lane content cell (row > 0 and column > 0).
    Content,
}

/// A non-owning key into the host's node registry.
///
/// The engine never dereferences this: the lifetime of the visual node is
/// managed entirely by the external graph collaborator, and a grid with no
/// host attached simply carries no ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from the host-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// The atomic grid unit: index, classification, absolute geometry, and the
/// optional back-reference to a host node.
///
/// Geometry is absolute in the diagram's local coordinate space. The label
/// is only meaningful for title cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    index: CellIndex,
    kind: CellKind,
    #[serde(flatten)]
    rect: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    external_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    label: String,
}

impl Cell {
    /// Creates a title cell with the given label.
    pub fn title(index: CellIndex, rect: Rect, label: impl Into<String>) -> Self {
        Self {
            index,
            kind: CellKind::Title,
            rect,
            external_id: None,
            label: label.into(),
        }
    }

    /// Creates a content cell.
    pub fn content(index: CellIndex, rect: Rect) -> Self {
        Self {
            index,
            kind: CellKind::Content,
            rect,
            external_id: None,
            label: String::new(),
        }
    }

    /// Creates the blank corner placeholder.
    pub fn blank(index: CellIndex, rect: Rect) -> Self {
        Self {
            index,
            kind: CellKind::Blank,
            rect,
            external_id: None,
            label: String::new(),
        }
    }

    /// Creates the right kind of cell for a storage position: the corner is
    /// blank, the rest of row 0 and column 0 are titles carrying
    /// `title_label`, everything else is content.
    pub fn for_index(index: CellIndex, rect: Rect, title_label: &str) -> Self {
        match (index.row(), index.col()) {
            (0, 0) => Self::blank(index, rect),
            (0, _) | (_, 0) => Self::title(index, rect, title_label),
            _ => Self::content(index, rect),
        }
    }

    /// Returns the cell's grid index.
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Returns the cell's classification.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the cell's absolute geometry.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the x-coordinate of the cell's left edge.
    pub fn x(&self) -> f32 {
        self.rect.x()
    }

    /// Returns the y-coordinate of the cell's top edge.
    pub fn y(&self) -> f32 {
        self.rect.y()
    }

    /// Returns the cell's width.
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Returns the cell's height.
    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// Returns the back-reference to the host node, if the cell has been
    /// materialized.
    pub fn external_id(&self) -> Option<&NodeId> {
        self.external_id.as_ref()
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True for the corner placeholder.
    pub fn is_blank(&self) -> bool {
        self.kind == CellKind::Blank
    }

    /// True for title-strip cells.
    pub fn is_title(&self) -> bool {
        self.kind == CellKind::Title
    }

    /// True for lane content cells.
    pub fn is_content(&self) -> bool {
        self.kind == CellKind::Content
    }

    /// Restamps the cell's index after a structural cascade.
    pub fn set_index(&mut self, index: CellIndex) {
        self.index = index;
    }

    /// Sets the absolute x-coordinate.
    pub fn set_x(&mut self, x: f32) {
        self.rect = Rect::new(x, self.rect.y(), self.rect.width(), self.rect.height());
    }

    /// Sets the absolute y-coordinate.
    pub fn set_y(&mut self, y: f32) {
        self.rect = Rect::new(self.rect.x(), y, self.rect.width(), self.rect.height());
    }

    /// Grows (or shrinks, for a negative delta) the cell's width.
    pub fn grow_width(&mut self, delta: f32) {
        self.rect = Rect::new(
            self.rect.x(),
            self.rect.y(),
            self.rect.width() + delta,
            self.rect.height(),
        );
    }

    /// Grows (or shrinks, for a negative delta) the cell's height.
    pub fn grow_height(&mut self, delta: f32) {
        self.rect = Rect::new(
            self.rect.x(),
            self.rect.y(),
            self.rect.width(),
            self.rect.height() + delta,
        );
    }

    /// Shifts the cell horizontally by a delta. Size is unchanged.
    pub fn shift_x(&mut self, delta: f32) {
        self.rect = self.rect.translate(delta, 0.0);
    }

    /// Shifts the cell vertically by a delta. Size is unchanged.
    pub fn shift_y(&mut self, delta: f32) {
        self.rect = self.rect.translate(0.0, delta);
    }

    /// Stamps or clears the back-reference to the host node.
    pub fn set_external_id(&mut self, id: Option<NodeId>) {
        self.external_id = id;
    }

    /// Replaces the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}
