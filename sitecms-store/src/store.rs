//! Typed slot access and cross-context change notification.
//!
//! A [`ContentStore`] wraps one backend and hands out [`StoreContext`]
//! handles, one per execution context (in the browser analogy, one per
//! tab). Saving through a context notifies watchers registered by *other*
//! contexts on the same slot; the writer's own context is never notified,
//! so an editor and a renderer sharing a context do not double-refresh.
//!
//! Concurrency contract: last writer wins, no merge, no conflict
//! detection. A context that read a slot and saves later overwrites
//! whatever another context wrote in between; the change notification is
//! the only synchronization mechanism on offer.

use crate::backend::SlotBackend;
use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// The outcome of a typed load.
///
/// `Absent` means the slot has never been written; it is not an error and
/// callers respond by falling back to (and, for editors, persisting)
/// default content. Malformed payloads are a [`StoreError::Parse`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// The slot has never been written.
    Absent,
    /// The slot held a complete, schema-valid value.
    Value(T),
}

impl<T> Loaded<T> {
    /// True if the slot had never been written.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts to an `Option`, discarding the absent/present distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Value(v) => Some(v),
        }
    }
}

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

struct Watcher {
    id: u64,
    ctx: u64,
    slot: String,
    callback: Callback,
}

struct Shared {
    backend: Box<dyn SlotBackend>,
    watchers: Mutex<Vec<Watcher>>,
    next_ctx: AtomicU64,
    next_watch: AtomicU64,
}

/// A shared content store: one backend plus the watcher registry.
///
/// Clone is cheap; all clones see the same slots and watchers.
#[derive(Clone)]
pub struct ContentStore {
    shared: Arc<Shared>,
}

impl ContentStore {
    /// Creates a store over the given backend.
    pub fn new(backend: impl SlotBackend + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                backend: Box::new(backend),
                watchers: Mutex::new(Vec::new()),
                next_ctx: AtomicU64::new(1),
                next_watch: AtomicU64::new(1),
            }),
        }
    }

    /// Convenience constructor over a [`crate::MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(crate::MemoryBackend::new())
    }

    /// Opens a new execution context on this store.
    #[must_use]
    pub fn context(&self) -> StoreContext {
        let ctx_id = self.shared.next_ctx.fetch_add(1, Ordering::Relaxed);
        StoreContext {
            shared: Arc::clone(&self.shared),
            ctx_id,
        }
    }
}

/// One execution context's view of the store.
///
/// Loads and saves are synchronous; a save is visible to every context as
/// soon as it returns. Clones share the context identity: components that
/// live in the same "tab" (say, an editor and a renderer) clone one
/// context so neither observes the other's saves through notification.
#[derive(Clone)]
pub struct StoreContext {
    shared: Arc<Shared>,
    ctx_id: u64,
}

impl StoreContext {
    /// Loads and deserializes a slot.
    ///
    /// Returns [`Loaded::Absent`] when the slot has never been written and
    /// [`StoreError::Parse`] when it holds something that is not a valid
    /// `T` (strict policy: a corrupt slot is surfaced, never re-seeded).
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> StoreResult<Loaded<T>> {
        match self.shared.backend.read(slot)? {
            None => Ok(Loaded::Absent),
            Some(payload) => {
                let value = serde_json::from_str(&payload).map_err(|source| StoreError::Parse {
                    slot: slot.to_string(),
                    source,
                })?;
                Ok(Loaded::Value(value))
            }
        }
    }

    /// Serializes `value` and overwrites the slot, then notifies watchers
    /// registered by other contexts. The writing context is not notified.
    pub fn save<T: Serialize>(&self, slot: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(StoreError::Serialization)?;
        self.shared.backend.write(slot, &payload)?;
        tracing::debug!(slot, bytes = payload.len(), "slot written");
        self.notify(slot, &payload);
        Ok(())
    }

    /// Returns the slot's raw persisted payload, if any. Lets tests and
    /// interop checks assert on the exact bytes.
    pub fn raw(&self, slot: &str) -> StoreResult<Option<String>> {
        self.shared.backend.read(slot)
    }

    /// Registers a cross-context observer on a slot.
    ///
    /// The callback runs with the new raw payload whenever *another*
    /// context saves the slot. Saves through this context never fire it.
    /// Dropping the returned handle unregisters the watcher.
    pub fn watch(
        &self,
        slot: &str,
        callback: impl Fn(&str) + Send + Sync + 'static,
    ) -> WatchHandle {
        let id = self.shared.next_watch.fetch_add(1, Ordering::Relaxed);
        self.shared.watchers.lock().unwrap().push(Watcher {
            id,
            ctx: self.ctx_id,
            slot: slot.to_string(),
            callback: Arc::new(callback),
        });
        WatchHandle {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    fn notify(&self, slot: &str, payload: &str) {
        // Snapshot the matching callbacks, then invoke them outside the
        // lock so a callback may itself touch the store.
        let callbacks: Vec<Callback> = {
            let watchers = self.shared.watchers.lock().unwrap();
            watchers
                .iter()
                .filter(|w| w.slot == slot && w.ctx != self.ctx_id)
                .map(|w| Arc::clone(&w.callback))
                .collect()
        };
        if !callbacks.is_empty() {
            tracing::debug!(slot, watchers = callbacks.len(), "notifying contexts");
        }
        for callback in callbacks {
            callback(payload);
        }
    }
}

/// Keeps a slot watcher registered; dropping it unsubscribes.
pub struct WatchHandle {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.watchers.lock().unwrap().retain(|w| w.id != self.id);
        }
    }
}
