//! Raw slot storage.
//!
//! A backend is a single-key-atomic string map; everything above it
//! (typed load/save, change notification) lives in [`crate::ContentStore`].

use crate::error::StoreResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Durable key-value storage holding one serialized collection per slot.
///
/// Implementations must provide single-key atomicity: a `write` either
/// fully replaces the slot or leaves it untouched. Nothing else is assumed.
pub trait SlotBackend: Send + Sync {
    /// Returns the slot's payload, or `None` if it has never been written.
    fn read(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Overwrites the slot with `payload`.
    fn write(&self, slot: &str, payload: &str) -> StoreResult<()>;
}

/// In-memory backend. The substitute for durable storage in tests, where
/// assertions run against the exact persisted payload.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotBackend for MemoryBackend {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.lock().unwrap().get(slot).cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> StoreResult<()> {
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
