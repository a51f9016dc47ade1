//! SQLite connection wrapper (one connection per command or request).

use crate::db::migrate::ensure_schema;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the file without touching the schema.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        ensure_schema(&pool.conn)?;
        Ok(pool)
    }

    /// In-memory database with the full schema, for tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }
}
