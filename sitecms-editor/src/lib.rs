//! Admin-side editors for sitecms collections.
//!
//! [`CollectionEditor`] is the generic two-state (browsing/editing) CRUD
//! and reordering machine over one slot-backed collection;
//! [`FooterEditor`] edits the footer aggregate. Both are the sole writers
//! in the system: every mutating operation persists synchronously through
//! the store before returning and yields a [`Notice`] for the host to
//! surface.
//!
//! First run: when a slot has never been written, opening an editor seeds
//! it with the supplied defaults and persists them immediately, so every
//! later load (from any context) reads the store.

mod collection;
mod error;
mod footer;
mod notice;

pub use collection::CollectionEditor;
pub use error::{EditorError, EditorResult};
pub use footer::FooterEditor;
pub use notice::{Notice, NoticeKind};
