//! Error types for editor operations.

use sitecms_store::StoreError;
use sitecms_types::MissingField;
use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// Every failure is scoped to the single operation that raised it; the
/// editor's in-memory collection and the persisted slot stay consistent.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The underlying store failed to load or persist.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The scratch buffer failed the required-field check on commit.
    /// The editor stays in the editing state and nothing is persisted.
    #[error(transparent)]
    Validation(#[from] MissingField),

    /// No record (or section/link) with the given id.
    #[error("no record with id {0}")]
    NotFound(u64),

    /// A browsing-only operation was called while an edit was in progress.
    #[error("an edit is already in progress")]
    EditInProgress,

    /// A commit or cancel was attempted with no edit in progress.
    #[error("no edit in progress")]
    NoDraft,

    /// A move was requested for an index past the end of the collection.
    #[error("index {0} out of range")]
    OutOfRange(usize),
}
