//! The external graph collaborator interface.
//!
//! The engine never draws anything. Visual nodes live in an external
//! graph/canvas, and the engine talks to it through [`GraphHost`]: node
//! lifecycle, geometry queries for embedded content, and the batch boundary
//! that coalesces a multi-cell reconciliation into one observable change.
//!
//! The engine assumes host operations succeed or raise synchronously and
//! does not retry; degradation policy belongs to the host.

use swimlane_core::{
    cell::{Cell, NodeId},
    geometry::Rect,
};

/// Interface to the externally-owned node registry.
pub trait GraphHost {
    /// Materializes a visual node for a cell and returns its identity. The
    /// engine stamps the id back into the grid; the node itself stays
    /// host-owned.
    fn create_node(&mut self, cell: &Cell) -> NodeId;

    /// Deletes a node. The host cascades the deletion to any content
    /// nested inside it.
    fn delete_node(&mut self, id: &NodeId);

    /// Resizes and repositions an existing node to match a cell's geometry.
    fn update_node(&mut self, id: &NodeId, rect: Rect);

    /// Current bounds of a node, or `None` if the host no longer knows it.
    fn node_bounds(&self, id: &NodeId) -> Option<Rect>;

    /// Whether any content is nested inside the node.
    fn has_children(&self, id: &NodeId) -> bool;

    /// Bounding box of all content nested inside the node, transitively.
    /// `None` when the node has no children.
    fn children_bounds(&self, id: &NodeId) -> Option<Rect>;

    /// Translates every child of the node by a delta, keeping nested
    /// content attached to its repositioned cell.
    fn translate_children(&mut self, id: &NodeId, dx: f32, dy: f32);

    /// Opens a named transaction; observers must see the whole batch as one
    /// coalesced change.
    fn begin_batch(&mut self, name: &str);

    /// Closes the named transaction.
    fn end_batch(&mut self, name: &str);
}

/// A host with no canvas behind it.
///
/// Hands out fresh ids and ignores everything else, which keeps the engine
/// fully usable as a pure data transform: layouts can be built, edited and
/// persisted without a graph attached.
#[derive(Debug, Default)]
pub struct DetachedHost {
    next_id: u64,
}

impl DetachedHost {
    /// Creates a detached host.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphHost for DetachedHost {
    fn create_node(&mut self, _cell: &Cell) -> NodeId {
        self.next_id += 1;
        NodeId::new(format!("cell-{}", self.next_id))
    }

    fn delete_node(&mut self, _id: &NodeId) {}

    fn update_node(&mut self, _id: &NodeId, _rect: Rect) {}

    fn node_bounds(&self, _id: &NodeId) -> Option<Rect> {
        None
    }

    fn has_children(&self, _id: &NodeId) -> bool {
        false
    }

    fn children_bounds(&self, _id: &NodeId) -> Option<Rect> {
        None
    }

    fn translate_children(&mut self, _id: &NodeId, _dx: f32, _dy: f32) {}

    fn begin_batch(&mut self, _name: &str) {}

    fn end_batch(&mut self, _name: &str) {}
}

#[cfg(test)]
mod tests {
    use swimlane_core::cell::CellIndex;

    use super::*;

    #[test]
    fn test_detached_host_ids_are_unique() {
        let mut host = DetachedHost::new();
        let cell = Cell::content(CellIndex::new(1, 1), Rect::new(0.0, 0.0, 10.0, 10.0));
        let a = host.create_node(&cell);
        let b = host.create_node(&cell);
        assert_ne!(a, b);
    }

    #[test]
    fn test_detached_host_reports_no_content() {
        let host = DetachedHost::new();
        let id = NodeId::from("cell-1");
        assert!(host.node_bounds(&id).is_none());
        assert!(!host.has_children(&id));
        assert!(host.children_bounds(&id).is_none());
    }
}
