//! Pillbox Reconcile - Incremental list reconciliation for the pillbox
//! widget.
//!
//! This crate keeps an externally rendered list in sync with the entry
//! collection without full re-renders. Rendered nodes are keyed by entry
//! value; an update only touches nodes for values that actually appeared
//! or disappeared, so the cost is proportional to the change, not to the
//! collection.
//!
//! # Core Concepts
//!
//! - `RenderSurface`: the seam to the rendering layer; owns node creation,
//!   attachment and removal
//! - `ListReconciler`: owns the value → node map and computes the patch
//!
//! # Example
//!
//! ```ignore
//! use pillbox_reconcile::ListReconciler;
//!
//! let mut reconciler = ListReconciler::new(surface);
//!
//! // Renders nodes for a and b.
//! reconciler.update(&entries_ab);
//!
//! // Renders exactly one node (c); a and b are left untouched.
//! reconciler.update(&entries_abc);
//! ```

#![no_std]

extern crate alloc;

pub mod reconciler;
pub mod surface;

pub use reconciler::ListReconciler;
pub use surface::RenderSurface;

// Re-export commonly used types from dependencies
pub use pillbox_core::{Entries, Entry};
