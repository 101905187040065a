//! Observable value containers.
//!
//! A [`Slot`] holds a single value plus an ordered list of subscribers.
//! Writes replace the whole value and fan out synchronously, so observers
//! never see a partial update and never miss one.
//!
//! # Contract
//!
//! - `get` returns the current value, never fails.
//! - `set` replaces the value, then notifies every live subscriber in
//!   subscription order with a clone of the new value.
//! - `subscribe` fires the handler once immediately with the current value,
//!   so new subscribers are never out of sync, then again on every `set`.
//! - `Subscription::unsubscribe` is idempotent and takes effect immediately:
//!   a handler deregistered mid-fan-out is skipped for the rest of that
//!   fan-out.

use std::sync::Arc;

use parking_lot::Mutex;

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SlotInner<T> {
    value: T,
    /// Monotonic id source for subscriber registration.
    next_id: u64,
    /// Subscribers in registration order.
    subscribers: Vec<(u64, Handler<T>)>,
}

/// A shared observable value.
///
/// Cloning a `Slot` yields another handle to the same value and subscriber
/// list. The interior lock is never held while a handler runs, so handlers
/// may freely call `get`, `set` or `subscribe` on the same slot.
#[derive(Clone)]
pub struct Slot<T> {
    inner: Arc<Mutex<SlotInner<T>>>,
}

impl<T: Clone + Send + 'static> Slot<T> {
    /// Create a slot holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replace the value and notify all live subscribers in order.
    pub fn set(&self, value: T) {
        let (value, targets) = {
            let mut inner = self.inner.lock();
            inner.value = value;
            (inner.value.clone(), inner.subscribers.clone())
        };
        tracing::trace!("slot set, notifying {} subscriber(s)", targets.len());
        for (id, handler) in targets {
            // Re-check liveness per handler: deregistration during fan-out
            // must stop further calls to that handler.
            if self.is_registered(id) {
                handler(&value);
            }
        }
    }

    /// Register `handler` and fire it once with the current value.
    ///
    /// The handler stays registered until [`Subscription::unsubscribe`] is
    /// called on the returned handle; dropping the handle without calling it
    /// leaves the subscription active.
    pub fn subscribe(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let handler: Handler<T> = Arc::new(handler);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&handler)));
            (id, inner.value.clone())
        };
        handler(&current);

        let slot = self.clone();
        Subscription {
            cancel: Some(Box::new(move || slot.remove(id))),
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner
            .lock()
            .subscribers
            .iter()
            .any(|(sid, _)| *sid == id)
    }

    fn remove(&self, id: u64) {
        self.inner.lock().subscribers.retain(|(sid, _)| *sid != id);
    }
}

/// Deregistration handle returned by [`Slot::subscribe`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Stop all further notifications to the handler.
    ///
    /// Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
