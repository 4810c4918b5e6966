//! Interactive seam dragging.
//!
//! A [`DragSession`] tracks one seam from arming to commit or cancel. It
//! holds a mutable borrow of the lane for its whole lifetime, so the
//! borrow checker rules out a second concurrent drag. Pointer samples are
//! rate-limited and clamped against the range computed when the drag was
//! armed; the grid itself is untouched until [`DragSession::commit`].

use std::time::{Duration, Instant};

use log::debug;

use swimlane_core::geometry::{Axis, Point};

use crate::{
    error::SwimlaneError,
    host::GraphHost,
    lane::{ResizeRequest, SwimLane},
    range::ResizeRange,
};

/// Where a drag session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// Armed on a seam, no movement accepted yet.
    Armed,
    /// At least one pointer sample has moved the candidate position.
    Dragging,
}

/// A single in-flight seam drag.
pub struct DragSession<'a> {
    lane: &'a mut SwimLane,
    axis: Axis,
    index: usize,
    range: ResizeRange,
    origin: f32,
    candidate: f32,
    state: DragState,
    last_sample: Option<Instant>,
    min_interval: Duration,
}

impl<'a> DragSession<'a> {
    pub(crate) fn new(
        lane: &'a mut SwimLane,
        axis: Axis,
        index: usize,
        range: ResizeRange,
        origin: f32,
    ) -> Self {
        let min_interval =
            Duration::from_millis(lane.config().min_drag_interval_ms());
        Self {
            lane,
            axis,
            index,
            range,
            origin,
            candidate: origin,
            state: DragState::Armed,
            last_sample: None,
            min_interval,
        }
    }

    /// Returns the session's lifecycle state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns the range the seam is clamped to.
    pub fn range(&self) -> ResizeRange {
        self.range
    }

    /// Returns the current candidate seam position.
    pub fn candidate(&self) -> f32 {
        self.candidate
    }

    /// Feeds a pointer sample and returns the clamped candidate position.
    ///
    /// Samples arriving faster than the configured minimum interval are
    /// discarded; the previous candidate is returned unchanged so callers
    /// can redraw the seam preview from the return value alone.
    pub fn update(&mut self, position: Point, now: Instant) -> f32 {
        if let Some(last) = self.last_sample {
            if now.duration_since(last) < self.min_interval {
                return self.candidate;
            }
        }
        self.last_sample = Some(now);

        let raw = match self.axis {
            Axis::Row => position.y(),
            Axis::Column => position.x(),
        };
        self.candidate = self.range.clamp(raw);
        self.state = DragState::Dragging;
        self.candidate
    }

    /// Commits the drag: the seam displacement accumulated so far is
    /// applied as a single resize. A drag that never moved, or moved back
    /// to its origin, commits as a no-op and touches neither grid nor host.
    ///
    /// # Errors
    ///
    /// Propagates resize failures from the lane.
    pub fn commit(self, host: &mut dyn GraphHost) -> Result<f32, SwimlaneError> {
        let offset = self.candidate - self.origin;
        debug!(axis:% = self.axis, index = self.index, offset; "Committing seam drag");
        if offset != 0.0 {
            self.lane
                .resize(host, ResizeRequest::new(self.axis, self.index, offset))?;
        }
        Ok(offset)
    }

    /// Abandons the drag. The lane was never touched, so there is nothing
    /// to roll back; the borrow is simply released.
    pub fn cancel(self) {
        debug!(axis:% = self.axis, index = self.index; "Cancelled seam drag");
    }
}
