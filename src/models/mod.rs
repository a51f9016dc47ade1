pub mod day_summary;
pub mod entry;
pub mod settings;
pub mod totals;
pub mod window;

pub use day_summary::DaySummary;
pub use entry::Entry;
pub use settings::{DEFAULT_SUGAR_LIMIT, SETTINGS_ID, Settings};
pub use totals::{DailyTotals, SugarStatus};
pub use window::DayWindow;
