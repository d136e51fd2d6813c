//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// An absent slot is not an error; see [`crate::Loaded::Absent`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot exists but its payload is not valid JSON of the expected
    /// shape. Never silently treated as absent: re-seeding over a corrupt
    /// slot would destroy whatever the operator had saved there.
    #[error("slot {slot}: malformed payload: {source}")]
    Parse {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for saving.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Database error from the SQLite backend.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
