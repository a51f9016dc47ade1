use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TotalsLogic;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::store::open_store;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{color_for_sugar, colorize_amount, paint};
use crate::utils::formatting::fmt_percent;
use crate::utils::fmt_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { date, json } = cmd {
        let day = resolve_day(date)?;

        let mut store = open_store(cfg)?;
        let summary = TotalsLogic::day(store.as_mut(), day, cfg.default_sugar_limit)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
    }

    Ok(())
}

fn print_summary(summary: &DaySummary) {
    let t = &summary.totals;
    let s = &summary.status;

    header(summary.window.day);
    println!("Entries:  {}", t.entries);
    println!(
        "Sugar:    {} / {} g ({})",
        paint(
            color_for_sugar(s.consumed, s.limit),
            &format!("{} g", fmt_amount(t.sugar_g))
        ),
        fmt_amount(s.limit),
        fmt_percent(s.percent)
    );
    println!("Water:    {} cups", colorize_amount(&fmt_amount(t.water_cups)));
    println!("Insulin:  {} units", colorize_amount(&fmt_amount(t.insulin_units)));
    println!();

    if s.exceeded {
        warning(format!(
            "Daily sugar limit exceeded by {} g",
            fmt_amount(s.consumed - s.limit)
        ));
    } else {
        success(format!("{} g of sugar left today", fmt_amount(s.remaining)));
    }
}
