//! Value-keyed list reconciliation.
//!
//! The reconciler consumes full collection snapshots and patches the
//! surface incrementally: nodes are created for new values, removed for
//! vanished values, and never recreated or reordered while their value
//! stays present. The model only ever appends or removes (no in-place
//! reorder), so position bookkeeping beyond insertion order is not needed.

use crate::surface::RenderSurface;
use alloc::string::String;
use hashbrown::{HashMap, HashSet};
use pillbox_core::Entry;

/// Incrementally patches a rendered list to match the current collection.
///
/// State is a map from entry value to the node handle returned by the
/// surface at insertion time. An update costs O(Δ) in the number of added
/// and removed values, not O(n) in the collection size, and any transient
/// state attached to an untouched node (focus, animations) survives.
pub struct ListReconciler<S: RenderSurface> {
    /// The rendering layer
    surface: S,
    /// Entry value → rendered node handle
    nodes: HashMap<String, S::Node>,
}

impl<S: RenderSurface> ListReconciler<S> {
    /// Creates a reconciler over a surface with no rendered nodes.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            nodes: HashMap::new(),
        }
    }

    /// Patches the surface to represent exactly `entries`.
    ///
    /// New values are inserted in collection order; values no longer
    /// present have their nodes removed. Duplicate values share a single
    /// rendered node, keyed by the value string.
    pub fn update(&mut self, entries: &[Entry]) {
        let current: HashSet<&str> = entries.iter().map(Entry::value).collect();

        for entry in entries {
            if !self.nodes.contains_key(entry.value()) {
                let node = self.surface.insert(entry);
                self.nodes.insert(entry.value().into(), node);
            }
        }

        let surface = &mut self.surface;
        self.nodes.retain(|value, node| {
            let keep = current.contains(value.as_str());
            if !keep {
                surface.remove(node);
            }
            keep
        });
    }

    /// Returns the node handle rendered for `value`, if any.
    pub fn node(&self, value: &str) -> Option<&S::Node> {
        self.nodes.get(value)
    }

    /// Returns true if a node is rendered for `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.nodes.contains_key(value)
    }

    /// Returns the number of rendered nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing is rendered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the surface.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
