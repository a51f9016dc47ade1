use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DeleteLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success, warning};
use crate::utils::fmt_amount;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        last,
        all,
        date,
        yes,
    } = cmd
    {
        let day = resolve_day(date)?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = if *all {
                format!("Delete ALL entries for {}? This action is irreversible.", day)
            } else {
                format!("Delete the last entry for {}? This action is irreversible.", day)
            };

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut store = open_store(cfg)?;

        if *last {
            match DeleteLogic::last(store.as_mut(), day)? {
                Some(e) => success(format!(
                    "Deleted entry #{}: {} at {} ({} g sugar)",
                    e.id,
                    e.food,
                    e.time_str(),
                    fmt_amount(e.sugar_g)
                )),
                None => info(format!("No entries for {}", day)),
            }
        } else if *all {
            let removed = DeleteLogic::day(store.as_mut(), day)?;
            if removed == 0 {
                info(format!("No entries for {}", day));
            } else {
                success(format!("Deleted {} entries for {}.", removed, day));
            }
        }
    }

    Ok(())
}
