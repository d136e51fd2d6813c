//! SQLite-backed slot storage.
//!
//! One `slots` table, one row per slot. SQLite's per-statement atomicity
//! gives the single-key atomicity the backend contract asks for.

use crate::backend::SlotBackend;
use crate::error::StoreResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;

/// Durable backend storing slot payloads in a SQLite database.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Opens (or creates) a slot database at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory slot database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                payload TEXT NOT NULL
            );
            ",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl SlotBackend for SqliteBackend {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let payload = conn
            .query_row(
                "SELECT payload FROM slots WHERE key = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&self, slot: &str, payload: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO slots (key, payload) VALUES (?1, ?2)",
            params![slot, payload],
        )?;
        Ok(())
    }
}
