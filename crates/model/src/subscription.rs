//! Subscription management for the entry model.
//!
//! Subscribers are kept in registration order, which is also notification
//! order. A notification pass walks a snapshot of the registry taken before
//! the first callback runs, so cancelling a subscription from inside a
//! callback never affects the pass already in flight.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use pillbox_core::{Entries, Result};

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Callback type for change notifications.
///
/// The callback receives the entire new collection snapshot. It may report
/// failure; failures are logged and discarded by the dispatch loop, never
/// surfaced to the mutating caller.
pub type ChangeCallback = Rc<dyn Fn(&Entries) -> Result<()>>;

/// A single registered subscriber.
#[derive(Clone)]
pub struct Subscription {
    /// Unique identifier
    id: SubscriptionId,
    /// Callback to invoke on changes
    callback: ChangeCallback,
}

impl Subscription {
    fn new(id: SubscriptionId, callback: ChangeCallback) -> Self {
        Self { id, callback }
    }

    /// Returns the subscription ID.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Notifies this subscription with the given snapshot.
    pub fn notify(&self, entries: &Entries) -> Result<()> {
        (self.callback)(entries)
    }
}

/// Ordered registry of subscribers for the entry model.
///
/// Registration order determines notification order.
pub struct SubscriberRegistry {
    /// Active subscriptions, in registration order. Shared with the
    /// handles returned by `subscribe`.
    subscriptions: Rc<RefCell<Vec<Subscription>>>,
    /// Next subscription ID to assign
    next_id: Cell<SubscriptionId>,
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            subscriptions: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(1),
        }
    }

    /// Appends a callback to the registry.
    ///
    /// Returns a handle that removes this exact registration again.
    /// Registering the same callback twice yields two independent handles.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&Entries) -> Result<()> + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.subscriptions
            .borrow_mut()
            .push(Subscription::new(id, Rc::new(callback)));

        SubscriptionHandle {
            registry: Rc::downgrade(&self.subscriptions),
            id,
        }
    }

    /// Notifies every subscriber, in registration order, with the given
    /// snapshot.
    ///
    /// The registry is snapshotted before the first callback runs:
    /// subscriptions added or cancelled by a callback take effect from the
    /// next pass onwards. A failing subscriber is logged and skipped; it
    /// never aborts the pass.
    pub fn notify_all(&self, entries: &Entries) {
        let pass: Vec<Subscription> = self.subscriptions.borrow().clone();
        for subscription in &pass {
            if let Err(err) = subscription.notify(entries) {
                log::warn!(
                    "subscriber {} failed during notification: {}",
                    subscription.id(),
                    err
                );
            }
        }
    }

    /// Notifies a single subscription by ID.
    ///
    /// Used for the immediate subscribe-time delivery; follows the same
    /// best-effort policy as a full pass.
    pub fn notify_one(&self, id: SubscriptionId, entries: &Entries) {
        let subscription = self
            .subscriptions
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned();
        if let Some(subscription) = subscription {
            if let Err(err) = subscription.notify(entries) {
                log::warn!("subscriber {} failed during notification: {}", id, err);
            }
        }
    }

    /// Returns the number of active subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Returns true if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }
}

/// Capability to cancel one subscription.
///
/// Holds a weak reference to the registry, so an outstanding handle does
/// not keep a dropped model alive.
pub struct SubscriptionHandle {
    registry: Weak<RefCell<Vec<Subscription>>>,
    id: SubscriptionId,
}

impl SubscriptionHandle {
    /// Removes the subscription from future notification passes.
    ///
    /// Returns true if the subscription was still registered. Cancelling
    /// again, or after the registry was dropped, is a no-op. Past
    /// notifications, including a pass currently in flight, are unaffected.
    pub fn cancel(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => {
                let mut subscriptions = registry.borrow_mut();
                let before = subscriptions.len();
                subscriptions.retain(|s| s.id != self.id);
                subscriptions.len() < before
            }
            None => false,
        }
    }

    /// Returns the subscription ID this handle controls.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}
