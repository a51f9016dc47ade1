use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AddLogic, EntryInput};
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::{date, fmt_amount};

/// Log a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        food,
        sugar,
        water,
        insulin,
        at,
    } = cmd
    {
        //
        // 1. Parse timestamp (optional, default = now)
        //
        let ts = match at {
            Some(raw) => Some(
                date::parse_datetime(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.clone()))?,
            ),
            None => None,
        };

        //
        // 2. Same validation path as the web form
        //
        let input = EntryInput::new(
            food,
            sugar.as_deref().unwrap_or(""),
            water.as_deref().unwrap_or(""),
            insulin.as_deref().unwrap_or(""),
        );

        //
        // 3. Store
        //
        let mut store = open_store(cfg)?;
        let entry = AddLogic::apply(store.as_mut(), &input, ts)?;

        success(format!(
            "Entry #{} saved: {} | sugar {} g | water {} cups | insulin {} units | {}",
            entry.id,
            entry.food,
            fmt_amount(entry.sugar_g),
            fmt_amount(entry.water_cups),
            fmt_amount(entry.insulin_units),
            entry.ts.format("%Y-%m-%d %H:%M"),
        ));
    }

    Ok(())
}
