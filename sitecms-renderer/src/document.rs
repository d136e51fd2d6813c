use crate::refresh;
use sitecms_store::{Loaded, StoreContext, StoreResult, WatchHandle};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Read-only presenter for a single-document slot (the footer aggregate).
///
/// Same contract as [`crate::CollectionRenderer`], minus truncation:
/// defaults on an absent slot without persisting, cross-context refresh
/// through the store's notification, explicit [`refresh`](Self::refresh)
/// for same-context edits.
pub struct DocumentRenderer<T> {
    ctx: StoreContext,
    slot: &'static str,
    snapshot: Arc<Mutex<T>>,
    _watch: WatchHandle,
}

impl<T> DocumentRenderer<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    /// Loads the slot (or the seed) and subscribes to cross-context
    /// changes.
    pub fn mount(ctx: StoreContext, slot: &'static str, seed: T) -> StoreResult<Self> {
        let initial = match ctx.load::<T>(slot)? {
            Loaded::Value(doc) => doc,
            Loaded::Absent => seed,
        };
        let snapshot = Arc::new(Mutex::new(initial));
        let cell = Arc::clone(&snapshot);
        let watch = ctx.watch(slot, move |payload| {
            refresh::apply(&cell, slot, payload);
        });
        Ok(Self {
            ctx,
            slot,
            snapshot,
            _watch: watch,
        })
    }

    /// Returns the current document.
    pub fn present(&self) -> T {
        self.snapshot.lock().unwrap().clone()
    }

    /// Explicitly re-reads the slot after a same-context edit.
    pub fn refresh(&self) -> StoreResult<()> {
        if let Loaded::Value(doc) = self.ctx.load::<T>(self.slot)? {
            *self.snapshot.lock().unwrap() = doc;
        }
        Ok(())
    }
}
