//! Listener registrations that unregister themselves when dropped.
//!
//! An emitter owns a [`Listeners`] registry. Each call to
//! [`Listeners::subscribe`] creates a mailbox and returns a [`Subscription`]
//! guarding it; events emitted afterwards are queued in every live mailbox
//! until the subscriber drains them. Dropping the subscription removes the
//! mailbox, so an emitter can never deliver to a listener that is gone.

use parking_lot::Mutex;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Weak};

struct Registry<E> {
    next_id: u64,
    mailboxes: BTreeMap<u64, VecDeque<E>>,
}

/// Registry of subscribers for events of type `E`.
pub struct Listeners<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                mailboxes: BTreeMap::new(),
            })),
        }
    }

    /// Register a new listener.
    pub fn subscribe(&self) -> Subscription<E> {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.mailboxes.insert(id, VecDeque::new());
        tracing::trace!(id, "Listener subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.registry.lock().mailboxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> Listeners<E> {
    /// Queue `event` for every live subscriber.
    pub fn emit(&self, event: E) {
        let mut registry = self.registry.lock();
        for mailbox in registry.mailboxes.values_mut() {
            mailbox.push_back(event.clone());
        }
    }
}

/// A live registration in a [`Listeners`] registry.
pub struct Subscription<E> {
    id: u64,
    registry: Weak<Mutex<Registry<E>>>,
}

impl<E> Subscription<E> {
    /// Take every event queued since the last drain, oldest first.
    pub fn drain(&self) -> Vec<E> {
        let Some(registry) = self.registry.upgrade() else {
            return Vec::new();
        };
        let mut registry = registry.lock();
        registry
            .mailboxes
            .get_mut(&self.id)
            .map(|mailbox| mailbox.drain(..).collect())
            .unwrap_or_default()
    }

    /// Returns false once the emitter has been dropped
    pub fn is_active(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().mailboxes.remove(&self.id);
            tracing::trace!(id = self.id, "Listener unsubscribed");
        }
    }
}

impl<E> std::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
