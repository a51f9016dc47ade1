use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::store::EntryStore;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

/// Raw user input for a new entry, as a web form or the CLI delivers it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryInput {
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub sugar: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub insulin: String,
}

/// Empty means zero; anything else must be a finite, non-negative number.
pub fn parse_amount(field: &str, raw: &str) -> AppResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::validation(format!("{field} must be a number, got '{raw}'")))?;

    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a number, got '{raw}'")));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!("{field} cannot be negative")));
    }

    Ok(value)
}

impl EntryInput {
    pub fn new(food: &str, sugar: &str, water: &str, insulin: &str) -> Self {
        Self {
            food: food.to_string(),
            sugar: sugar.to_string(),
            water: water.to_string(),
            insulin: insulin.to_string(),
        }
    }

    /// Validate into an unsaved [`Entry`] stamped with `ts`.
    pub fn into_entry(&self, ts: NaiveDateTime) -> AppResult<Entry> {
        let food = self.food.trim();
        if food.is_empty() {
            return Err(AppError::validation("Food name is required"));
        }

        let sugar = parse_amount("Sugar", &self.sugar)?;
        let water = parse_amount("Water", &self.water)?;
        let insulin = parse_amount("Insulin", &self.insulin)?;

        Ok(Entry::new(ts, food, sugar, water, insulin))
    }
}

/// High-level business logic for adding entries.
pub struct AddLogic;

impl AddLogic {
    /// Validate `input` and store it, stamped with `at` or the current time.
    pub fn apply(
        store: &mut dyn EntryStore,
        input: &EntryInput,
        at: Option<NaiveDateTime>,
    ) -> AppResult<Entry> {
        let ts = at.unwrap_or_else(|| Local::now().naive_local());
        let entry = input.into_entry(ts)?;

        let saved = store.add_entry(&entry)?;
        info!(id = saved.id, food = %saved.food, backend = store.backend_name(), "entry saved");

        Ok(saved)
    }
}
