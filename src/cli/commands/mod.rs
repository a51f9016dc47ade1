pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod limit;
pub mod list;
pub mod log;
pub mod serve;
pub mod totals;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// `--date` value, or today when absent.
pub(crate) fn resolve_day(input: &Option<String>) -> AppResult<NaiveDate> {
    date::parse_optional_date(input.as_ref()).map_err(AppError::InvalidDate)
}
