use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use tracing::info;

pub struct LimitLogic;

impl LimitLogic {
    /// Stored daily sugar limit, or `default_limit` when no settings row exists.
    pub fn get(store: &mut dyn EntryStore, default_limit: f64) -> AppResult<f64> {
        Ok(store.sugar_limit()?.unwrap_or(default_limit))
    }

    /// Parse the raw value typed by the user.
    pub fn parse(raw: &str) -> AppResult<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AppError::validation("Limit must be a number"))
    }

    pub fn validate(value: f64) -> AppResult<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::validation("Limit must be > 0"));
        }
        Ok(value)
    }

    /// Validate and store a new limit. Nothing is written when validation fails.
    pub fn set(store: &mut dyn EntryStore, value: f64) -> AppResult<f64> {
        let value = Self::validate(value)?;
        store.set_sugar_limit(value)?;
        info!(limit = value, "daily sugar limit updated");
        Ok(value)
    }

    pub fn set_from_str(store: &mut dyn EntryStore, raw: &str) -> AppResult<f64> {
        let value = Self::parse(raw)?;
        Self::set(store, value)
    }
}
