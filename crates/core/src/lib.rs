//! Pillbox Core - Core types for the pillbox multi-value input widget.
//!
//! This crate provides the foundational types shared by the model and
//! reconciler crates:
//!
//! - `Entry`: one collected value plus the validity computed at creation
//! - `Entries`: an immutable snapshot of the ordered collection
//! - `validate`: the email-shape predicate applied to new entries
//! - `Error`: error types for widget operations
//!
//! # Example
//!
//! ```rust
//! use pillbox_core::Entry;
//!
//! let entries = Entry::from_raw(["", " x@y.com ", "bad"]);
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].value(), "x@y.com");
//! assert!(entries[0].is_valid());
//! assert_eq!(entries[1].value(), "bad");
//! assert!(!entries[1].is_valid());
//! ```

#![no_std]

extern crate alloc;

mod entry;
mod error;
pub mod validate;

pub use entry::{Entries, Entry};
pub use error::{Error, Result};
