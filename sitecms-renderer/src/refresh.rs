//! Shared notification-driven snapshot refresh.

use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Parses a notified payload into the snapshot cell.
///
/// A notification callback cannot propagate an error, so a payload that
/// fails to parse is logged and the previous snapshot is kept; the next
/// valid save will replace it.
pub(crate) fn apply<T: DeserializeOwned>(cell: &Arc<Mutex<T>>, slot: &str, payload: &str) {
    match serde_json::from_str::<T>(payload) {
        Ok(value) => *cell.lock().unwrap() = value,
        Err(err) => {
            tracing::warn!(slot, error = %err, "ignoring malformed slot update");
        }
    }
}
