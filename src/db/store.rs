//! [`EntryStore`] over the local SQLite file.
//! Every mutation also leaves a line in the internal `log` table.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{DayWindow, Entry};
use crate::store::EntryStore;

impl EntryStore for DbPool {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn add_entry(&mut self, entry: &Entry) -> AppResult<Entry> {
        let id = queries::insert_entry(&self.conn, entry)?;

        ttlog_quiet(
            &self.conn,
            "add",
            &id.to_string(),
            &format!("Added '{}' at {}", entry.food, entry.ts_str()),
        );

        Ok(entry.clone().with_id(id))
    }

    fn entries_in(&mut self, window: &DayWindow) -> AppResult<Vec<Entry>> {
        queries::load_entries_in_window(&self.conn, window)
    }

    fn entries_between(&mut self, first: &DayWindow, last: &DayWindow) -> AppResult<Vec<Entry>> {
        queries::load_entries_between(&self.conn, first, last)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<bool> {
        let deleted = queries::delete_entry(&self.conn, id)? > 0;

        if deleted {
            ttlog_quiet(&self.conn, "del", &id.to_string(), "Deleted entry");
        }

        Ok(deleted)
    }

    fn delete_in(&mut self, window: &DayWindow) -> AppResult<usize> {
        let removed = queries::delete_entries_in_window(&self.conn, window)?;

        ttlog_quiet(
            &self.conn,
            "del_day",
            &window.day.to_string(),
            &format!("Deleted {removed} entries"),
        );

        Ok(removed)
    }

    fn sugar_limit(&mut self) -> AppResult<Option<f64>> {
        queries::load_sugar_limit(&self.conn)
    }

    fn set_sugar_limit(&mut self, value: f64) -> AppResult<()> {
        queries::upsert_sugar_limit(&self.conn, value)?;

        ttlog_quiet(
            &self.conn,
            "set_limit",
            "settings",
            &format!("Daily sugar limit set to {value}"),
        );

        Ok(())
    }

    fn audit_log(&mut self) -> AppResult<Vec<(String, String, String, String)>> {
        queries::load_log(&self.conn)
    }
}
