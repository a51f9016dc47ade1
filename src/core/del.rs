use crate::errors::AppResult;
use crate::models::{DayWindow, Entry};
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the most recent entry of `day` (latest timestamp, then highest id).
    /// Returns the removed entry, or `None` when the day has no entries.
    pub fn last(store: &mut dyn EntryStore, day: NaiveDate) -> AppResult<Option<Entry>> {
        let window = DayWindow::for_date(day);
        let entries = store.entries_in(&window)?;

        let Some(latest) = entries
            .into_iter()
            .filter(|e| window.contains(&e.ts))
            .max_by(|a, b| a.ts.cmp(&b.ts).then(a.id.cmp(&b.id)))
        else {
            return Ok(None);
        };

        if !store.delete_entry(latest.id)? {
            return Ok(None);
        }

        info!(id = latest.id, food = %latest.food, "deleted last entry of {}", day);
        Ok(Some(latest))
    }

    /// Delete every entry of `day`; returns how many were removed.
    pub fn day(store: &mut dyn EntryStore, day: NaiveDate) -> AppResult<usize> {
        let removed = store.delete_in(&DayWindow::for_date(day))?;
        info!(removed, "deleted all entries of {}", day);
        Ok(removed)
    }
}
