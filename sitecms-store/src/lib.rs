//! Slot-keyed persistent collection store for sitecms.
//!
//! Persistence is a single named slot per collection, JSON-encoded, over a
//! pluggable [`SlotBackend`] (in-memory for tests, SQLite for durable
//! storage). Typed access and the cross-context change notification live
//! in [`ContentStore`] / [`StoreContext`].
//!
//! # Architecture
//!
//! - A slot is either absent (never written) or holds one complete,
//!   schema-valid JSON value; typed deserialization at this boundary is
//!   the shape check.
//! - Writes are last-writer-wins with no merge. The store's notification
//!   to other contexts is the sole synchronization mechanism.
//! - Notification is cross-context only by contract: the writer's own
//!   context never observes its own save.

mod backend;
mod error;
mod sqlite;
mod store;

pub use backend::{MemoryBackend, SlotBackend};
pub use error::{StoreError, StoreResult};
pub use sqlite::SqliteBackend;
pub use store::{ContentStore, Loaded, StoreContext, WatchHandle};
