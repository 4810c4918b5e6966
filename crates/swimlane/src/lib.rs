//! Swimlane grid layout engine.
//!
//! A swimlane diagram is a two-dimensional matrix of cells: a blank
//! corner, a title strip along row 0 and column 0, and content cells
//! everywhere else. This crate keeps that matrix internally consistent
//! while rows and columns are inserted, removed, and resized, and
//! reconciles each committed edit against a visual host through the
//! [`GraphHost`] trait.
//!
//! The aggregate type is [`SwimLane`]; everything else supports it:
//! [`Grid`] stores the matrix and cascades coordinates, [`ResizeRange`]
//! bounds seam moves, and [`DragSession`] drives interactive resizing.
//! A lane built over [`DetachedHost`] works as pure layout data.

pub mod config;

mod drag;
mod error;
mod event;
mod grid;
mod host;
mod lane;
mod range;

pub use swimlane_core::{cell, geometry};

pub use crate::config::LaneConfig;
pub use crate::drag::{DragSession, DragState};
pub use crate::error::SwimlaneError;
pub use crate::event::{EditKind, LayoutChanged};
pub use crate::grid::Grid;
pub use crate::host::{DetachedHost, GraphHost};
pub use crate::lane::{ResizeRequest, SwimLane};
pub use crate::range::ResizeRange;
