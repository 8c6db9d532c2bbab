//! Pillbox Model - Observable entry collection for the pillbox widget.
//!
//! This crate implements the authoritative ordered collection behind the
//! widget. Mutations are copy-on-write: every add/delete builds a fresh
//! immutable snapshot, and all subscribers are then notified with the
//! entire new collection, in registration order.
//!
//! # Core Concepts
//!
//! - `EntryModel`: owns the ordered entries; applies mutations; fans out
//!   change notifications
//! - `SubscriberRegistry`: ordered list of notification callbacks
//! - `SubscriptionHandle`: capability returned by `subscribe`, cancelling
//!   exactly one registration
//!
//! # Key Features
//!
//! - `subscribe()`: registers a callback and immediately invokes it once
//!   with the current snapshot
//! - best-effort fan-out: a failing subscriber is logged and skipped, never
//!   breaking the writer
//!
//! # Example
//!
//! ```rust
//! use pillbox_model::EntryModel;
//!
//! let mut model = EntryModel::new(["a@b.com"]);
//!
//! let handle = model.subscribe(|entries| {
//!     // invoked immediately, then after every mutation
//!     let _ = entries.len();
//!     Ok(())
//! });
//!
//! let entries = model.add_entries("c@d.com, bad").unwrap();
//! assert_eq!(entries.len(), 3);
//!
//! handle.cancel();
//! ```

#![no_std]

extern crate alloc;

pub mod model;
pub mod subscription;

pub use model::EntryModel;
pub use subscription::{
    ChangeCallback, SubscriberRegistry, Subscription, SubscriptionHandle, SubscriptionId,
};

// Re-export commonly used types from dependencies
pub use pillbox_core::{Entries, Entry, Error, Result};
