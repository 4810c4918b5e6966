//! Configuration for swimlane grid construction and interaction.
//!
//! [`LaneConfig`] groups the geometry defaults a fresh grid is synthesized
//! from and the interaction constants the resize machinery consults. All
//! fields deserialize with [`serde`] and fall back to the stock defaults,
//! so a TOML config file may override any subset.
//!
//! # Example
//!
//! ```
//! # use swimlane::config::LaneConfig;
//! let config = LaneConfig::default();
//! assert_eq!(config.lane_width(), 300.0);
//! assert_eq!(config.lanes(), (2, 2));
//! ```

use serde::Deserialize;

use swimlane_core::geometry::{Axis, Point, Rect};

fn default_origin() -> (f32, f32) {
    (100.0, 100.0)
}

fn default_lanes() -> (usize, usize) {
    (2, 2)
}

// A grid needs at least one content lane per axis on top of the title
// strip, so zero lane counts never reach synthesis.
fn lanes_at_least_one<'de, D>(deserializer: D) -> Result<(usize, usize), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let lanes = <(usize, usize)>::deserialize(deserializer)?;
    if lanes.0 == 0 || lanes.1 == 0 {
        return Err(serde::de::Error::custom(format!(
            "lanes must have at least one row and one column, got ({}, {})",
            lanes.0, lanes.1
        )));
    }
    Ok(lanes)
}

fn default_lane_width() -> f32 {
    300.0
}

fn default_lane_height() -> f32 {
    300.0
}

fn default_row_title_height() -> f32 {
    40.0
}

fn default_column_title_width() -> f32 {
    100.0
}

fn default_content_padding() -> f32 {
    8.0
}

fn default_min_drag_interval_ms() -> u64 {
    16
}

fn default_title_label() -> String {
    "Untitled".to_owned()
}

/// Geometry defaults and interaction constants for a swimlane.
#[derive(Debug, Clone, Deserialize)]
pub struct LaneConfig {
    /// Top-left corner of the grid in diagram coordinates.
    #[serde(default = "default_origin")]
    origin: (f32, f32),

    /// Content lanes per axis `(rows, cols)` for a synthesized grid, at
    /// least one per axis. The title strip adds one to each grid dimension.
    #[serde(default = "default_lanes", deserialize_with = "lanes_at_least_one")]
    lanes: (usize, usize),

    /// Default width of a new column lane.
    #[serde(default = "default_lane_width")]
    lane_width: f32,

    /// Default height of a new row lane.
    #[serde(default = "default_lane_height")]
    lane_height: f32,

    /// Height of the title strip along row 0, and the minimum height a row
    /// seam may shrink to.
    #[serde(default = "default_row_title_height")]
    row_title_height: f32,

    /// Width of the title strip along column 0, and the minimum width a
    /// column seam may shrink to.
    #[serde(default = "default_column_title_width")]
    column_title_width: f32,

    /// Clearance kept between embedded content and a shrinking seam.
    #[serde(default = "default_content_padding")]
    content_padding: f32,

    /// Minimum milliseconds between accepted drag samples.
    #[serde(default = "default_min_drag_interval_ms")]
    min_drag_interval_ms: u64,

    /// Label stamped on newly created title cells.
    #[serde(default = "default_title_label")]
    title_label: String,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            lanes: default_lanes(),
            lane_width: default_lane_width(),
            lane_height: default_lane_height(),
            row_title_height: default_row_title_height(),
            column_title_width: default_column_title_width(),
            content_padding: default_content_padding(),
            min_drag_interval_ms: default_min_drag_interval_ms(),
            title_label: default_title_label(),
        }
    }
}

impl LaneConfig {
    /// Returns the grid origin as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.origin.0, self.origin.1)
    }

    /// Returns the content lane counts `(rows, cols)` for synthesis.
    pub fn lanes(&self) -> (usize, usize) {
        self.lanes
    }

    /// Returns the default width of a column lane.
    pub fn lane_width(&self) -> f32 {
        self.lane_width
    }

    /// Returns the default height of a row lane.
    pub fn lane_height(&self) -> f32 {
        self.lane_height
    }

    /// Returns the row title strip height.
    pub fn row_title_height(&self) -> f32 {
        self.row_title_height
    }

    /// Returns the column title strip width.
    pub fn column_title_width(&self) -> f32 {
        self.column_title_width
    }

    /// Returns the clearance kept around embedded content.
    pub fn content_padding(&self) -> f32 {
        self.content_padding
    }

    /// Returns the minimum interval between accepted drag samples.
    pub fn min_drag_interval_ms(&self) -> u64 {
        self.min_drag_interval_ms
    }

    /// Returns the label stamped on new title cells.
    pub fn title_label(&self) -> &str {
        &self.title_label
    }

    /// Returns the minimum cell size along an axis: the title strip size
    /// doubles as the smallest a lane may shrink to.
    pub fn min_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.row_title_height,
            Axis::Column => self.column_title_width,
        }
    }

    /// Returns the default lane size along an axis.
    pub fn lane_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.lane_height,
            Axis::Column => self.lane_width,
        }
    }

    /// Computes the synthesized geometry of the cell at a storage position:
    /// the title strip takes the title sizes, every lane takes the default
    /// lane size, and positions accumulate from the origin.
    pub(crate) fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (origin_x, origin_y) = self.origin;
        let x = if col == 0 {
            origin_x
        } else {
            origin_x + self.column_title_width + self.lane_width * (col - 1) as f32
        };
        let y = if row == 0 {
            origin_y
        } else {
            origin_y + self.row_title_height + self.lane_height * (row - 1) as f32
        };
        let width = if col == 0 {
            self.column_title_width
        } else {
            self.lane_width
        };
        let height = if row == 0 {
            self.row_title_height
        } else {
            self.lane_height
        };
        Rect::new(x, y, width, height)
    }
}
