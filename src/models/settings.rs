use serde::{Deserialize, Serialize};

/// Fixed key of the singleton settings row.
pub const SETTINGS_ID: i64 = 1;

/// Limit used when the settings row does not exist yet.
pub const DEFAULT_SUGAR_LIMIT: f64 = 50.0;

/// ⇔ settings row `id = 1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: i64,
    pub daily_sugar_limit: f64,
}

impl Settings {
    pub fn with_limit(daily_sugar_limit: f64) -> Self {
        Self {
            id: SETTINGS_ID,
            daily_sugar_limit,
        }
    }
}
