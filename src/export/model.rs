use crate::models::Entry;
use serde::Serialize;

/// Flat row written by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub food: String,
    pub sugar_g: f64,
    pub water_cups: f64,
    pub insulin_units: f64,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.ts.format("%Y-%m-%d").to_string(),
            time: e.ts.format("%H:%M:%S").to_string(),
            food: e.food.clone(),
            sugar_g: e.sugar_g,
            water_cups: e.water_cups,
            insulin_units: e.insulin_units,
        }
    }
}
