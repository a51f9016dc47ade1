use crate::core::limit::LimitLogic;
use crate::errors::AppResult;
use crate::models::{DailyTotals, DaySummary, DayWindow, Entry};
use crate::store::EntryStore;
use chrono::NaiveDate;

pub struct TotalsLogic;

impl TotalsLogic {
    /// Totals and sugar status for `day`.
    pub fn day(store: &mut dyn EntryStore, day: NaiveDate, default_limit: f64) -> AppResult<DaySummary> {
        let window = DayWindow::for_date(day);
        let entries = store.entries_in(&window)?;
        let totals = DailyTotals::for_window(&window, &entries);
        let limit = LimitLogic::get(store, default_limit)?;

        Ok(DaySummary::new(window, totals, limit))
    }

    /// Entries of `day`, newest first.
    pub fn entries(store: &mut dyn EntryStore, day: NaiveDate) -> AppResult<Vec<Entry>> {
        let window = DayWindow::for_date(day);
        let mut entries = store.entries_in(&window)?;
        entries.retain(|e| window.contains(&e.ts));
        Ok(entries)
    }
}
