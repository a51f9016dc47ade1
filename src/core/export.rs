use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::DayWindow;
use crate::store::EntryStore;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::{Datelike, NaiveDate};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Resolve `--range` (`YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `A:B` of those).
    /// No range means the current month.
    pub fn resolve_range(range: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
        match range {
            Some(r) => date::resolve_range(r).map_err(AppError::InvalidDate),
            None => {
                let today = date::today();
                let first = today.with_day(1).unwrap_or(today);
                Ok((first, date::last_day_of_month(today.year(), today.month())))
            }
        }
    }

    /// Load the entries of the range, oldest first, as export rows.
    pub fn collect(
        store: &mut dyn EntryStore,
        first: NaiveDate,
        last: NaiveDate,
    ) -> AppResult<Vec<EntryExport>> {
        let entries = store.entries_between(&DayWindow::for_date(first), &DayWindow::for_date(last))?;
        Ok(entries.iter().map(EntryExport::from).collect())
    }

    /// Write the entries of `range` to `file`. Returns how many rows were written.
    pub fn export(
        store: &mut dyn EntryStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let (first, last) = Self::resolve_range(range)?;
        let rows = Self::collect(store, first, last)?;

        if rows.is_empty() {
            warning(format!("No entries found between {first} and {last}."));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        tracing::info!(format = format.as_str(), rows = rows.len(), "export written");
        Ok(rows.len())
    }
}
