//! Public-side renderers for sitecms content.
//!
//! Renderers are strictly readers: they load a slot (falling back to
//! default content when the slot has never been written, without
//! persisting it), optionally truncate for preview sections, and keep
//! their snapshot current through the store's cross-context change
//! notification. An edit made in the renderer's own context produces no
//! notification by contract; hosts call `refresh` after such edits.

mod collection;
mod document;
mod refresh;

pub use collection::CollectionRenderer;
pub use document::DocumentRenderer;
