use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TotalsLogic;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::store::open_store;
use crate::ui::messages::{header, info};
use crate::utils::fmt_amount;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let day = resolve_day(date)?;

        let mut store = open_store(cfg)?;
        let entries = TotalsLogic::entries(store.as_mut(), day)?;

        header(day);

        if entries.is_empty() {
            info(format!("No entries for {}", day));
            return Ok(());
        }

        print!("{}", entries_table(&entries).render());
    }

    Ok(())
}

pub(crate) fn entries_table(entries: &[Entry]) -> Table {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("TIME"),
        Column::left("FOOD"),
        Column::right("SUGAR g"),
        Column::right("WATER cups"),
        Column::right("INSULIN u"),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.time_str(),
            e.food.clone(),
            fmt_amount(e.sugar_g),
            fmt_amount(e.water_cups),
            fmt_amount(e.insulin_units),
        ]);
    }

    table
}
