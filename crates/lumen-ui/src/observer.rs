//! Row event bus
//!
//! View-models publish state changes through an explicit subscription
//! interface instead of callback slots. A subscriber gets a channel receiver
//! to drain at its own pace, and dropping the `Subscription` unsubscribes, so
//! a recycled view can never be called into by a stale model.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Broadcast bus for view-model events.
pub struct EventBus<T> {
    inner: Arc<BusInner<T>>,
}

struct BusInner<T> {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(u64, Sender<T>)>>,
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                next_id: AtomicU64::new(0),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register a subscriber. Events published after this call are delivered
    /// to the returned receiver until the `Subscription` is dropped.
    pub fn subscribe(&self) -> (Subscription<T>, Receiver<T>) {
        let (tx, rx) = unbounded();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().unwrap().push((id, tx));

        let sub = Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        };
        (sub, rx)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }
}

impl<T: Clone> EventBus<T> {
    /// Publish an event to every live subscriber. Subscribers whose receiver
    /// has been dropped are pruned here.
    pub fn publish(&self, event: T) {
        let mut subs = self.inner.subscribers.lock().unwrap();
        subs.retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }
}

/// Subscription token. Dropping it removes the subscriber from the bus.
pub struct Subscription<T> {
    id: u64,
    bus: Weak<BusInner<T>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.subscribers.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.id)
    }
}
