//! Storage seam between the business logic and the backing tables.
//!
//! Two backends implement [`EntryStore`]: the local SQLite file (`db`) and a
//! Supabase project reached through its PostgREST API (`remote`).

use crate::config::{Backend, Config};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{DayWindow, Entry};
use crate::remote::RemoteStore;
use tracing::debug;

pub trait EntryStore {
    /// Short backend name used in messages.
    fn backend_name(&self) -> &'static str;

    /// Insert one entry; returns it with the id assigned by the store.
    fn add_entry(&mut self, entry: &Entry) -> AppResult<Entry>;

    /// Entries with `window.start <= ts < window.end`, newest first.
    fn entries_in(&mut self, window: &DayWindow) -> AppResult<Vec<Entry>>;

    /// Entries from the start of `first` up to the end of `last`, oldest first.
    fn entries_between(&mut self, first: &DayWindow, last: &DayWindow) -> AppResult<Vec<Entry>>;

    /// Delete a single entry; `false` when no row had that id.
    fn delete_entry(&mut self, id: i64) -> AppResult<bool>;

    /// Delete every entry of the window; returns how many rows went away.
    fn delete_in(&mut self, window: &DayWindow) -> AppResult<usize>;

    /// `None` when the settings row does not exist.
    fn sugar_limit(&mut self) -> AppResult<Option<f64>>;

    /// Write the settings row, creating it when missing.
    fn set_sugar_limit(&mut self, value: f64) -> AppResult<()>;

    /// Internal audit log rows `(date, operation, target, message)`, newest first.
    fn audit_log(&mut self) -> AppResult<Vec<(String, String, String, String)>>;
}

/// Open the backend selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn EntryStore>> {
    match cfg.backend {
        Backend::Sqlite => {
            debug!(path = %cfg.database, "opening sqlite store");
            Ok(Box::new(DbPool::open(&cfg.database)?))
        }
        Backend::Remote => {
            debug!(url = %cfg.remote_url, "opening remote store");
            Ok(Box::new(RemoteStore::from_config(cfg)?))
        }
    }
}
