//! Legal drag bounds for a seam.
//!
//! Before a resize drag starts, the range calculator derives the `[min,
//! max]` pixel interval the seam may move in. The baseline comes from grid
//! geometry alone; embedded content then overrides the shrink side so that
//! nothing a user placed inside a lane can ever be clipped. The calculator
//! is read-only with respect to the grid.

use log::debug;

use swimlane_core::geometry::{Axis, Rect};

use crate::{config::LaneConfig, error::SwimlaneError, grid::Grid, host::GraphHost};

/// The legal pixel interval for a seam drag, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRange {
    min: f32,
    max: f32,
}

impl ResizeRange {
    /// Returns the smallest legal seam position.
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the largest legal seam position.
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a candidate seam position into the range.
    pub fn clamp(self, position: f32) -> f32 {
        position.clamp(self.min, self.max)
    }
}

/// Computes the legal drag range for the seam at the far edge of band
/// `index`.
///
/// The baseline `min` is the band origin plus the axis minimum size; the
/// baseline `max` is the next seam's position when one exists, otherwise
/// the band's own far edge plus one default lane (growth past the last seam
/// is allowed up to one lane). If any host node occupies the band and
/// carries nested content, the content bounding box's far edge plus the
/// configured padding *replaces* the baseline `min`.
///
/// # Errors
///
/// [`SwimlaneError::LaneOutOfRange`] for a band that does not exist;
/// [`SwimlaneError::IllegalRange`] when content pushes `min` past `max`,
/// meaning the seam must not move in the requested direction.
pub(crate) fn compute_range(
    grid: &Grid,
    config: &LaneConfig,
    host: &dyn GraphHost,
    axis: Axis,
    index: usize,
) -> Result<ResizeRange, SwimlaneError> {
    let extent = match axis {
        Axis::Row => grid.rows(),
        Axis::Column => grid.cols(),
    };
    if index >= extent {
        return Err(SwimlaneError::LaneOutOfRange {
            axis,
            index,
            extent,
        });
    }

    let band_origin = match axis {
        Axis::Row => grid.get(index, 0)?.y(),
        Axis::Column => grid.get(0, index)?.x(),
    };

    let mut min = band_origin + config.min_size(axis);
    let max = if index + 1 < extent {
        grid.seam_position(axis, index + 1)?
    } else {
        grid.seam_position(axis, index)? + config.lane_size(axis)
    };

    if let Some(content) = band_content_bounds(grid, host, axis, index)? {
        let far_edge = match axis {
            Axis::Row => content.bottom(),
            Axis::Column => content.right(),
        };
        min = far_edge + config.content_padding();
        debug!(axis:%, index, far_edge; "Content override on resize range");
    }

    if min > max {
        return Err(SwimlaneError::IllegalRange {
            axis,
            index,
            min,
            max,
        });
    }

    Ok(ResizeRange { min, max })
}

/// Bounding box of everything embedded in the band: each materialized cell
/// contributes its node's nested-content bounds, and the host resolves the
/// nesting transitively.
fn band_content_bounds(
    grid: &Grid,
    host: &dyn GraphHost,
    axis: Axis,
    index: usize,
) -> Result<Option<Rect>, SwimlaneError> {
    let cells = match axis {
        Axis::Row => grid.slice_rows(index, Some(index + 1))?,
        Axis::Column => grid.slice_cols(index, Some(index + 1))?,
    };

    let mut bounds: Option<Rect> = None;
    for cell in cells {
        let Some(id) = cell.external_id() else {
            continue;
        };
        if let Some(content) = host.children_bounds(id) {
            bounds = Some(match bounds {
                Some(acc) => acc.union(&content),
                None => content,
            });
        }
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use swimlane_core::cell::{Cell, NodeId};

    use super::*;
    use crate::host::DetachedHost;
    use crate::lane::synthesize_grid;

    /// Host double that reports fixed nested-content bounds per node.
    #[derive(Default)]
    struct ContentHost {
        content: HashMap<NodeId, Rect>,
        next_id: u64,
    }

    impl ContentHost {
        fn with_content(content: Vec<(NodeId, Rect)>) -> Self {
            Self {
                content: content.into_iter().collect(),
                next_id: 0,
            }
        }
    }

    impl GraphHost for ContentHost {
        fn create_node(&mut self, _cell: &Cell) -> NodeId {
            self.next_id += 1;
            NodeId::new(format!("n-{}", self.next_id))
        }

        fn delete_node(&mut self, _id: &NodeId) {}

        fn update_node(&mut self, _id: &NodeId, _rect: Rect) {}

        fn node_bounds(&self, _id: &NodeId) -> Option<Rect> {
            None
        }

        fn has_children(&self, id: &NodeId) -> bool {
            self.content.contains_key(id)
        }

        fn children_bounds(&self, id: &NodeId) -> Option<Rect> {
            self.content.get(id).copied()
        }

        fn translate_children(&mut self, _id: &NodeId, _dx: f32, _dy: f32) {}

        fn begin_batch(&mut self, _name: &str) {}

        fn end_batch(&mut self, _name: &str) {}
    }

    fn materialized_grid() -> Grid {
        let mut grid = synthesize_grid(&crate::config::LaneConfig::default());
        let mut counter = 0;
        for i in 0..grid.rows() {
            for j in 0..grid.cols() {
                counter += 1;
                grid.get_mut(i, j)
                    .expect("cell")
                    .set_external_id(Some(NodeId::new(format!("n-{counter}"))));
            }
        }
        grid
    }

    #[test]
    fn test_baseline_range_between_seams() {
        let grid = synthesize_grid(&crate::config::LaneConfig::default());
        let config = crate::config::LaneConfig::default();
        let host = DetachedHost::new();

        let range = compute_range(&grid, &config, &host, Axis::Column, 1).expect("range");
        // Column 1 starts at 200; min size along columns is the title width.
        assert_eq!(range.min(), 300.0);
        // Next seam is the far edge of column 2.
        assert_eq!(range.max(), 800.0);
    }

    #[test]
    fn test_baseline_range_last_seam_grows_one_lane() {
        let grid = synthesize_grid(&crate::config::LaneConfig::default());
        let config = crate::config::LaneConfig::default();
        let host = DetachedHost::new();

        let range = compute_range(&grid, &config, &host, Axis::Row, 2).expect("range");
        assert_eq!(range.min(), 440.0 + 40.0);
        // Own far edge plus one default lane.
        assert_eq!(range.max(), 740.0 + 300.0);
    }

    #[test]
    fn test_content_overrides_min() {
        let grid = materialized_grid();
        let config = crate::config::LaneConfig::default();
        // Content cell (1, 1) holds a node spanning x in [210, 480].
        let id = grid.get(1, 1).expect("cell").external_id().expect("id").clone();
        let host = ContentHost::with_content(vec![(id, Rect::new(210.0, 180.0, 270.0, 100.0))]);

        let range = compute_range(&grid, &config, &host, Axis::Column, 1).expect("range");
        assert_eq!(range.min(), 480.0 + config.content_padding());
        assert_eq!(range.max(), 800.0);
    }

    #[test]
    fn test_content_forcing_min_past_max_is_illegal() {
        let grid = materialized_grid();
        let config = crate::config::LaneConfig::default();
        let id = grid.get(1, 1).expect("cell").external_id().expect("id").clone();
        // Content reaching past the next seam at 800.
        let host = ContentHost::with_content(vec![(id, Rect::new(210.0, 180.0, 700.0, 100.0))]);

        let err = compute_range(&grid, &config, &host, Axis::Column, 1).expect_err("illegal");
        assert!(matches!(err, SwimlaneError::IllegalRange { .. }));
    }

    #[test]
    fn test_content_in_row_overrides_with_bottom_edge() {
        let grid = materialized_grid();
        let config = crate::config::LaneConfig::default();
        let id = grid.get(1, 2).expect("cell").external_id().expect("id").clone();
        let host = ContentHost::with_content(vec![(id, Rect::new(520.0, 200.0, 100.0, 150.0))]);

        let range = compute_range(&grid, &config, &host, Axis::Row, 1).expect("range");
        assert_eq!(range.min(), 350.0 + config.content_padding());
    }

    #[test]
    fn test_unknown_band_rejected() {
        let grid = synthesize_grid(&crate::config::LaneConfig::default());
        let config = crate::config::LaneConfig::default();
        let host = DetachedHost::new();
        assert!(matches!(
            compute_range(&grid, &config, &host, Axis::Column, 9),
            Err(SwimlaneError::LaneOutOfRange { .. })
        ));
    }

    #[test]
    fn test_clamp() {
        let range = ResizeRange {
            min: 300.0,
            max: 800.0,
        };
        assert_eq!(range.clamp(100.0), 300.0);
        assert_eq!(range.clamp(500.0), 500.0);
        assert_eq!(range.clamp(900.0), 800.0);
    }
}
