use super::entry::Entry;
use super::window::DayWindow;
use serde::Serialize;

/// Sums of the tracked metrics over one day window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub sugar_g: f64,
    pub water_cups: f64,
    pub insulin_units: f64,
    pub entries: usize,
}

impl DailyTotals {
    /// Sum every entry whose timestamp falls inside `window`.
    /// Entries outside the window are ignored, whatever the store returned.
    pub fn for_window<'a, I>(window: &DayWindow, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .filter(|e| window.contains(&e.ts))
            .fold(Self::default(), |mut acc, e| {
                acc.sugar_g += e.sugar_g;
                acc.water_cups += e.water_cups;
                acc.insulin_units += e.insulin_units;
                acc.entries += 1;
                acc
            })
    }
}

/// Where the day's sugar stands against the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SugarStatus {
    pub limit: f64,
    pub consumed: f64,
    pub remaining: f64,
    pub percent: f64,
    pub exceeded: bool,
}

impl SugarStatus {
    pub fn new(consumed: f64, limit: f64) -> Self {
        let percent = if limit > 0.0 {
            consumed / limit * 100.0
        } else {
            0.0
        };

        Self {
            limit,
            consumed,
            remaining: (limit - consumed).max(0.0),
            percent,
            exceeded: consumed > limit,
        }
    }
}
