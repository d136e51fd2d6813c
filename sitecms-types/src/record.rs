use serde::Serialize;
use serde::de::DeserializeOwned;

/// A required field was empty when a record was about to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("required field is empty: {0}")]
pub struct MissingField(pub &'static str);

/// An editable record in an ordered collection.
///
/// Implemented by the record types the generic collection editor and
/// renderer operate on. Ids are unique within a collection; array position
/// is the display order and is mutated only by explicit move operations.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Human label used in operation notices ("FAQ", ...).
    fn kind() -> &'static str;

    /// The record's stable id.
    fn id(&self) -> u64;

    /// Overwrites the record's id. Used when allocating a draft.
    fn set_id(&mut self, id: u64);

    /// An empty record carrying a freshly allocated id, used as the
    /// editor's scratch buffer for a new entry.
    fn blank(id: u64) -> Self;

    /// Checks that every required field is present and non-empty.
    fn validate(&self) -> Result<(), MissingField>;
}
