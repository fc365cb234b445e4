//! Reactive value container shared by the client stores.
//!
//! DESIGN
//! ======
//! A `Store<T>` holds one value and a subscriber registry. `set`/`update`
//! replace the whole value and synchronously invoke every subscriber with the
//! new value before returning; `subscribe` invokes the listener once with the
//! current value at registration time. Notification is unconditional, with no
//! equality short-circuit, so side-effect listeners re-run even when a caller
//! writes the value already held.
//!
//! The container targets the single-threaded browser event loop but stays
//! `Send + Sync` so native tests can drive it directly. Locks are only ever
//! held while copying data, never across a listener call, which keeps
//! re-entrant subscribers (a listener reading or mutating the store) safe; a
//! listener that unconditionally mutates the store recurses.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Entry<T> {
    id: u64,
    listener: Listener<T>,
}

struct Inner<T> {
    value: RwLock<T>,
    entries: RwLock<Vec<Entry<T>>>,
    next_id: AtomicU64,
}

/// Observable holder of a single value.
///
/// Cloning a `Store` clones the handle, not the value: all clones share the
/// same state and subscriber registry.
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                entries: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole value and notify every subscriber before returning.
    pub fn set(&self, value: T) {
        {
            let mut slot = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *slot = value.clone();
        }
        self.notify(&value);
    }

    /// Replace the value with one computed from the current value.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.get());
        self.set(next);
    }

    /// Register `listener` and invoke it once with the current value.
    ///
    /// The listener then runs on every mutation until the returned handle's
    /// [`Subscription::unsubscribe`] is called. Listeners run in subscription
    /// order.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<T> = Arc::new(listener);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut entries = self
                .inner
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            entries.push(Entry {
                id,
                listener: Arc::clone(&listener),
            });
        }
        listener(&self.get());

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || detach(&inner, id))
    }

    /// Invoke every registered listener with `value`.
    ///
    /// The registry is snapshotted first and no lock is held during calls.
    fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = {
            let entries = self
                .inner
                .entries
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            entries.iter().map(|e| Arc::clone(&e.listener)).collect()
        };
        for listener in listeners {
            listener(value);
        }
    }
}

fn detach<T>(inner: &Weak<Inner<T>>, id: u64) {
    if let Some(inner) = inner.upgrade() {
        let mut entries = inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|e| e.id != id);
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Store").field("value", &*value).finish()
    }
}

/// Handle detaching one listener from its store.
///
/// Dropping the handle without calling [`Subscription::unsubscribe`] leaves
/// the listener attached for the life of the store; the singleton stores rely
/// on that for their app-lifetime listeners.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Detach the listener; later mutations no longer invoke it.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
