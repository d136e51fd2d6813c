use crate::refresh;
use sitecms_store::{Loaded, StoreContext, StoreResult, WatchHandle};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Read-only presenter for one slot-backed collection.
///
/// On mount it loads the slot, falling back to the seed when the slot has
/// never been written — without persisting it; rendering never writes.
/// It then watches the slot and swaps in the new content whenever another
/// context saves it. Saves from the renderer's own context (an editor in
/// the same "tab") do not notify; call [`refresh`](Self::refresh) after
/// such edits instead.
pub struct CollectionRenderer<T> {
    ctx: StoreContext,
    slot: &'static str,
    snapshot: Arc<Mutex<Vec<T>>>,
    _watch: WatchHandle,
}

impl<T> CollectionRenderer<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    /// Loads the slot (or the seed) and subscribes to cross-context
    /// changes. A malformed slot is a hard error, same as the editor side.
    pub fn mount(ctx: StoreContext, slot: &'static str, seed: Vec<T>) -> StoreResult<Self> {
        let initial = match ctx.load::<Vec<T>>(slot)? {
            Loaded::Value(items) => items,
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

    /// Returns records in stored order; with a limit, at most the first
    /// `limit` of them (the "preview" view).
    pub fn present(&self, limit: Option<usize>) -> Vec<T> {
        let items = self.snapshot.lock().unwrap();
        match limit {
            Some(n) => items.iter().take(n).cloned().collect(),
            None => items.clone(),
        }
    }

    /// Explicitly re-reads the slot. Needed after a same-context edit,
    /// which by contract produces no notification. A slot that reverted
    /// to absent keeps the current snapshot.
    pub fn refresh(&self) -> StoreResult<()> {
        if let Loaded::Value(items) = self.ctx.load::<Vec<T>>(self.slot)? {
            *self.snapshot.lock().unwrap() = items;
        }
        Ok(())
    }
}
