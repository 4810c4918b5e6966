//! Geometric primitives for swimlane grid layout.
//!
//! This module provides the geometric types used throughout the engine for
//! cell placement and resize bookkeeping.
//!
//! # Overview
//!
//! - [`Axis`] - Which direction of the grid an operation applies to
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Rect`] - An axis-aligned rectangle stored as origin plus size
//!
//! # Coordinate System
//!
//! The origin sits at the top-left corner; X increases rightward and Y
//! increases downward, matching screen and SVG conventions. Cell geometry is
//! absolute in this space, never relative to a parent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of a structural edit or seam drag.
///
/// Rows stack vertically (a row seam moves along Y), columns stack
/// horizontally (a column seam moves along X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// A 2D point in the diagram's local coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point moved by the given deltas.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned rectangle stored as top-left origin plus size.
///
/// This is the persisted geometry shape of a cell: serializing a [`Rect`]
/// yields the plain `x`/`y`/`width`/`height` record the flat cell list
/// carries.
///
/// # Examples
///
/// ```
/// # use swimlane_core::geometry::Rect;
/// let lane = Rect::new(200.0, 140.0, 300.0, 300.0);
/// assert_eq!(lane.right(), 500.0);
/// assert_eq!(lane.bottom(), 440.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x-coordinate of the left edge.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the top edge.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge.
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge.
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner as a point.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns a new rectangle moved by the given deltas. Size is unchanged.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use swimlane_core::geometry::Rect;
    /// let title = Rect::new(100.0, 100.0, 100.0, 40.0);
    /// let lane = Rect::new(200.0, 140.0, 300.0, 300.0);
    ///
    /// let both = title.union(&lane);
    /// assert_eq!(both.x(), 100.0);
    /// assert_eq!(both.right(), 500.0);
    /// assert_eq!(both.bottom(), 440.0);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}
