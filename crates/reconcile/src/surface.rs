//! Render surface trait: the seam between the reconciler and the
//! externally rendered list.

use pillbox_core::Entry;

/// An externally rendered list the reconciler patches.
///
/// Implementations own the container and any fixed trailing control; the
/// reconciler only ever asks for a node to be inserted or removed, and
/// holds the returned handles across updates.
pub trait RenderSurface {
    /// Handle to one rendered node.
    type Node;

    /// Creates a node representing `entry` and attaches it at the correct
    /// position (immediately before any fixed trailing control).
    ///
    /// The node carries a remove control tagged with the entry's value and
    /// is visually distinguished when the entry is invalid.
    fn insert(&mut self, entry: &Entry) -> Self::Node;

    /// Detaches a node previously returned by `insert`.
    fn remove(&mut self, node: &Self::Node);
}
