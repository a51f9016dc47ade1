use super::entry::{TS_FORMAT, to_local_rfc3339};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Half-open local time interval `[midnight(day), midnight(day + 1))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub day: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    pub fn for_date(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN);
        // NaiveDate::MAX has no successor; clamp to the last representable instant
        let end = day
            .checked_add_days(Days::new(1))
            .map(|next| next.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);

        Self { day, start, end }
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        self.start <= *ts && *ts < self.end
    }

    pub fn start_str(&self) -> String {
        self.start.format(TS_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(TS_FORMAT).to_string()
    }

    /// Bounds with the local offset, for stores that compare instants.
    pub fn start_rfc3339(&self) -> String {
        to_local_rfc3339(&self.start)
    }

    pub fn end_rfc3339(&self) -> String {
        to_local_rfc3339(&self.end)
    }
}
