//! The entry model: the authoritative ordered collection.
//!
//! Owns the entries, applies mutations, and fans out change notifications.
//! Mutations always replace the whole snapshot (copy-on-write), so every
//! snapshot a subscriber has received stays valid forever.

use crate::subscription::{SubscriberRegistry, SubscriptionHandle};
use alloc::vec::Vec;
use pillbox_core::{Entries, Entry, Error, Result};

/// Fixed reason surfaced when entry construction fails during an add.
const ADD_FAILURE: &str = "failed to add new values";

/// The authoritative ordered collection of entries.
///
/// Duplicates are permitted; insertion order is preserved. After every
/// successful mutation all subscribers are notified with the new snapshot,
/// in registration order, before the mutation returns.
///
/// # Example
///
/// ```rust
/// use pillbox_model::EntryModel;
///
/// let mut model = EntryModel::new(["", " x@y.com ", "bad"]);
/// assert_eq!(model.len(), 2);
///
/// model.add_entries("a@b.com,c@d.com").unwrap();
/// assert_eq!(model.len(), 4);
///
/// model.delete_entries("bad").unwrap();
/// assert_eq!(model.len(), 3);
/// ```
pub struct EntryModel {
    /// Current snapshot (replaced, never mutated)
    entries: Entries,
    /// Ordered change subscribers
    subscribers: SubscriberRegistry,
}

impl EntryModel {
    /// Creates a model from raw initial values.
    ///
    /// Values are trimmed; values empty after trimming are discarded;
    /// survivors keep their input order. No notification fires at
    /// construction.
    pub fn new<'a>(raw_values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: Entry::from_raw(raw_values).into(),
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Returns the live snapshot reference.
    #[inline]
    pub fn entries(&self) -> Entries {
        self.entries.clone()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of registered subscribers.
    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Appends the entries found in `raw_input` and notifies subscribers.
    ///
    /// `raw_input` is split on `,`; each candidate is then trimmed and
    /// dropped if empty, exactly as at construction. Surviving candidates
    /// are appended, in order, behind the existing entries.
    ///
    /// On success the new snapshot is returned. A construction fault leaves
    /// the collection unchanged and nothing is notified. A subscriber
    /// failure during notification never fails the mutation.
    pub fn add_entries(&mut self, raw_input: &str) -> Result<Entries> {
        let added = self
            .build_entries(raw_input)
            .map_err(|_| Error::construction(ADD_FAILURE))?;

        let mut next: Vec<Entry> = self.entries.to_vec();
        next.extend(added);
        self.entries = next.into();

        self.subscribers.notify_all(&self.entries);
        Ok(self.entries.clone())
    }

    /// Removes every entry whose value equals `value` exactly and notifies
    /// subscribers.
    ///
    /// Matching is case-sensitive and untrimmed. Deleting a value with no
    /// matching entry is a no-op success; remaining entries keep their
    /// relative order.
    pub fn delete_entries(&mut self, value: &str) -> Result<Entries> {
        let next: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.value() != value)
            .cloned()
            .collect();
        self.entries = next.into();

        self.subscribers.notify_all(&self.entries);
        Ok(self.entries.clone())
    }

    /// Registers a change callback.
    ///
    /// The callback is invoked immediately and synchronously with the
    /// current snapshot, then once after every successful mutation, until
    /// the returned handle is cancelled.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&Entries) -> Result<()> + 'static,
    {
        let handle = self.subscribers.subscribe(callback);
        self.subscribers.notify_one(handle.id(), &self.entries);
        handle
    }

    /// Entry construction seam for `add_entries`.
    ///
    /// Validation cannot fail; any fault reported here aborts the mutation
    /// before any state change or notification, and is surfaced with the
    /// fixed reason `"failed to add new values"`.
    fn build_entries(&self, raw_input: &str) -> Result<Vec<Entry>> {
        Ok(Entry::from_raw(raw_input.split(',')))
    }
}

impl Default for EntryModel {
    /// Creates an empty model.
    fn default() -> Self {
        Self {
            entries: Vec::new().into(),
            subscribers: SubscriberRegistry::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    fn values(entries: &Entries) -> Vec<&str> {
        entries.iter().map(Entry::value).collect()
    }

    #[test]
    fn test_new_trims_and_discards_empty() {
        let model = EntryModel::new(["", " x@y.com ", "bad"]);
        let entries = model.entries();

        assert_eq!(values(&entries), vec!["x@y.com", "bad"]);
        assert!(entries[0].is_valid());
        assert!(!entries[1].is_valid());
    }

    #[test]
    fn test_new_preserves_input_order() {
        let model = EntryModel::new(["c@d.com", "a@b.com", "b@c.com"]);
        assert_eq!(
            values(&model.entries()),
            vec!["c@d.com", "a@b.com", "b@c.com"]
        );
    }

    #[test]
    fn test_add_splits_on_comma() {
        let mut model = EntryModel::new(["x@y.com"]);

        let entries = model.add_entries("a@b.com,c@d.com").unwrap();

        assert_eq!(values(&entries), vec!["x@y.com", "a@b.com", "c@d.com"]);
    }

    #[test]
    fn test_add_trims_each_candidate() {
        let mut model = EntryModel::default();

        let entries = model.add_entries(" a@b.com , ,c@d.com ").unwrap();

        assert_eq!(values(&entries), vec!["a@b.com", "c@d.com"]);
    }

    #[test]
    fn test_add_is_append_only() {
        let mut model = EntryModel::new(["a@b.com", "bad"]);
        let before = model.entries();

        let after = model.add_entries("c@d.com").unwrap();

        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap().value(), "c@d.com");
    }

    #[test]
    fn test_add_validates_each_candidate_independently() {
        let mut model = EntryModel::default();

        let entries = model.add_entries("a@b.com,nope").unwrap();

        assert!(entries[0].is_valid());
        assert!(!entries[1].is_valid());
    }

    #[test]
    fn test_add_with_nothing_surviving_still_notifies() {
        let mut model = EntryModel::new(["a@b.com"]);

        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        model.subscribe(move |_| {
            *c.borrow_mut() += 1;
            Ok(())
        });
        assert_eq!(*count.borrow(), 1); // immediate delivery

        let entries = model.add_entries(" , ,").unwrap();

        assert_eq!(values(&entries), vec!["a@b.com"]);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_delete_removes_all_matching() {
        let mut model = EntryModel::new(["a@b.com", "x", "a@b.com", "y"]);

        let entries = model.delete_entries("a@b.com").unwrap();

        assert_eq!(values(&entries), vec!["x", "y"]);
    }

    #[test]
    fn test_delete_is_exact_and_case_sensitive() {
        let mut model = EntryModel::new(["A@B.com", "a@b.com"]);

        let entries = model.delete_entries("a@b.com").unwrap();

        assert_eq!(values(&entries), vec!["A@B.com"]);
    }

    #[test]
    fn test_delete_absent_value_is_noop_success() {
        let mut model = EntryModel::new(["a@b.com"]);

        let entries = model.delete_entries("missing").unwrap();

        assert_eq!(values(&entries), vec!["a@b.com"]);
    }

    #[test]
    fn test_delete_notifies_even_without_match() {
        let mut model = EntryModel::new(["a@b.com"]);

        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        model.subscribe(move |_| {
            *c.borrow_mut() += 1;
            Ok(())
        });

        model.delete_entries("missing").unwrap();

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_subscribe_invokes_immediately_with_current_snapshot() {
        let model = EntryModel::new(["a@b.com"]);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        model.subscribe(move |entries| {
            s.borrow_mut().push(entries.len());
            Ok(())
        });

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_each_mutation_notifies_once_with_post_state() {
        let mut model = EntryModel::default();

        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        model.subscribe(move |entries| {
            s.borrow_mut()
                .push(entries.iter().map(|e| e.value().into()).collect());
            Ok(())
        });

        model.add_entries("a@b.com").unwrap();
        model.add_entries("c@d.com").unwrap();
        model.delete_entries("a@b.com").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen[0].is_empty());
        assert_eq!(seen[1], vec!["a@b.com"]);
        assert_eq!(seen[2], vec!["a@b.com", "c@d.com"]);
        assert_eq!(seen[3], vec!["c@d.com"]);
    }

    #[test]
    fn test_subscribers_notified_in_registration_order() {
        let mut model = EntryModel::default();

        let order = Rc::new(RefCell::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();

        model.subscribe(move |_| {
            o1.borrow_mut().push("first");
            Ok(())
        });
        model.subscribe(move |_| {
            o2.borrow_mut().push("second");
            Ok(())
        });
        order.borrow_mut().clear();

        model.add_entries("a@b.com").unwrap();

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_cancelled_subscriber_gets_no_future_notifications() {
        let mut model = EntryModel::default();

        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let handle = model.subscribe(move |_| {
            *c.borrow_mut() += 1;
            Ok(())
        });

        model.add_entries("a@b.com").unwrap();
        assert_eq!(*count.borrow(), 2);

        handle.cancel();
        model.add_entries("c@d.com").unwrap();

        assert_eq!(*count.borrow(), 2);
        assert_eq!(model.subscriber_count(), 0);
    }

    #[test]
    fn test_failing_subscriber_never_fails_the_mutation() {
        let mut model = EntryModel::default();

        let count = Rc::new(RefCell::new(0));
        let c = count.clone();

        model.subscribe(|_| Err(Error::subscriber("render sink detached")));
        model.subscribe(move |_| {
            *c.borrow_mut() += 1;
            Ok(())
        });

        let entries = model.add_entries("a@b.com").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_retained_snapshot_survives_mutations_unchanged() {
        let mut model = EntryModel::new(["a@b.com", "bad"]);
        let retained = model.entries();

        model.add_entries("c@d.com").unwrap();
        model.delete_entries("a@b.com").unwrap();

        assert_eq!(values(&retained), vec!["a@b.com", "bad"]);
    }

    #[test]
    fn test_snapshots_are_distinct_per_version() {
        let mut model = EntryModel::new(["a@b.com"]);
        let before = model.entries();

        let after = model.add_entries("c@d.com").unwrap();

        assert!(!Rc::ptr_eq(&before, &after));
        assert!(Rc::ptr_eq(&after, &model.entries()));
    }

    #[test]
    fn test_entries_returns_live_snapshot() {
        let model = EntryModel::new(["a@b.com"]);
        assert!(Rc::ptr_eq(&model.entries(), &model.entries()));
    }
}
