//! Change signals for store subscribers.
//!
//! Every store owns a `ChangeSignal` and emits on it after a mutation has
//! been applied. Subscribers register callbacks and get a [`Subscription`]
//! back; dropping it (or calling [`Subscription::unsubscribe`]) removes the
//! callback. Callbacks run synchronously on the emitting call, after the
//! store has released its own locks, so a callback may read from or write
//! to the store that notified it.

use std::sync::{Arc, RwLock, Weak};

use crate::lock;

/// Event payload carried by a store's signal
pub trait StoreEvent: Clone + Send + Sync + 'static {
    /// Signal name, used in logs (`auth-change`, `bookings-updated`, ...)
    const NAME: &'static str;
}

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync + 'static>;

struct Listeners<E> {
    next_id: u64,
    entries: Vec<(u64, Listener<E>)>,
}

/// Push-based subscription list for one store.
///
/// Cloning shares the listener list.
pub struct ChangeSignal<E> {
    listeners: Arc<RwLock<Listeners<E>>>,
}

impl<E> Clone for ChangeSignal<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<E: StoreEvent> ChangeSignal<E> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback for every future emission.
    pub fn subscribe(&self, callback: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut listeners = lock::write(&self.listeners);
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Arc::new(callback)));
            id
        };
        tracing::trace!(signal = E::NAME, listener = id, "Listener subscribed");

        let weak: Weak<RwLock<Listeners<E>>> = Arc::downgrade(&self.listeners);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    lock::write(&listeners)
                        .entries
                        .retain(|(entry_id, _)| *entry_id != id);
                    tracing::trace!(signal = E::NAME, listener = id, "Listener removed");
                }
            })),
        }
    }

    /// Deliver an event to every current subscriber.
    ///
    /// The listener list is snapshotted first, so subscribing or
    /// unsubscribing from inside a callback takes effect on the next emit.
    pub fn emit(&self, event: E) {
        let snapshot: Vec<Listener<E>> = lock::read(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(signal = E::NAME, listeners = snapshot.len(), "Emitting");
        for listener in snapshot {
            listener(&event);
        }
    }

    /// Get the number of subscribers.
    pub fn listener_count(&self) -> usize {
        lock::read(&self.listeners).entries.len()
    }
}

impl<E: StoreEvent> Default for ChangeSignal<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a registered callback.
///
/// Dropping the handle unsubscribes. Call [`Subscription::detach`] to keep
/// the callback registered for as long as the signal lives.
#[must_use = "dropping a Subscription immediately unsubscribes its callback"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync + 'static>>,
}

impl Subscription {
    /// Stop receiving events. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Keep the callback registered without holding the handle.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
