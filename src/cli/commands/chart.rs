use crate::chart;
use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TotalsLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{header, success};
use crate::utils::colors::colors_enabled;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { date, width, svg } = cmd {
        let day = resolve_day(date)?;

        let mut store = open_store(cfg)?;
        let summary = TotalsLogic::day(store.as_mut(), day, cfg.default_sugar_limit)?;

        if let Some(path) = svg {
            fs::write(path, chart::svg::render(&summary.totals, summary.limit()))?;
            success(format!("Chart for {} written to {}", day, path));
            return Ok(());
        }

        header(day);
        println!(
            "{}",
            chart::terminal::render(&summary.totals, summary.limit(), *width, colors_enabled())
        );
    }

    Ok(())
}
