//! Entry structure for the pillbox collection.
//!
//! This module defines the `Entry` struct which represents a single
//! collected value, and the `Entries` snapshot type handed to subscribers.

use crate::validate::is_email;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

/// An immutable snapshot of the ordered entry collection.
///
/// Every model mutation produces a fresh snapshot; a snapshot handed out
/// is never mutated afterwards and is safe to retain indefinitely.
pub type Entries = Rc<[Entry]>;

/// One collected value.
///
/// `valid` is computed once, when the entry is created, and never
/// re-derived afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The trimmed raw text of the item.
    value: String,
    /// Whether `value` passed the email-shape predicate at creation time.
    valid: bool,
}

impl Entry {
    /// Creates an entry from an already-trimmed value, classifying it with
    /// the email-shape predicate.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = is_email(&value);
        Self { value, valid }
    }

    /// Builds entries from raw candidate strings.
    ///
    /// Each candidate is trimmed; candidates that are empty after trimming
    /// are discarded. Input order is preserved. This is the single
    /// construction rule, shared by model construction and add.
    pub fn from_raw<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Entry> {
        values
            .into_iter()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(Entry::new)
            .collect()
    }

    /// Returns the entry's value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the value passed the email-shape predicate at
    /// creation time.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
