use super::totals::{DailyTotals, SugarStatus};
use super::window::DayWindow;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub window: DayWindow,
    pub totals: DailyTotals,
    pub status: SugarStatus,
}

impl DaySummary {
    pub fn new(window: DayWindow, totals: DailyTotals, limit: f64) -> Self {
        Self {
            window,
            totals,
            status: SugarStatus::new(totals.sugar_g, limit),
        }
    }

    pub fn limit(&self) -> f64 {
        self.status.limit
    }
}
