use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW, paint};

/// ANSI color for an operation name in the internal log.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" => GREEN,
        "del" | "del_day" => RED,
        "set_limit" => YELLOW,
        "init" => BLUE,
        _ => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut store = open_store(cfg)?;
        let rows = store.audit_log()?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!(
                "{date} {} {:<10} {message}",
                paint(color_for_operation(&operation), &format!("{operation:<18}")),
                target
            );
        }
    }

    Ok(())
}
