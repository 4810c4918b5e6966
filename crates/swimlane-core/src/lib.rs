//! Swimlane Core Types and Definitions
//!
//! This crate provides the foundational types for swimlane grid layouts.
//! It includes:
//!
//! - **Geometry**: Axis-aware geometric types ([`geometry`] module)
//! - **Cells**: The atomic grid unit and its identity ([`cell`] module)
//!
//! The types here are pure data: no host canvas, no I/O. The `swimlane`
//! crate builds the grid engine on top of them.

pub mod cell;
pub mod geometry;
