use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LimitLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::utils::fmt_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Limit { value } = cmd {
        let mut store = open_store(cfg)?;

        match value {
            Some(raw) => {
                let limit = LimitLogic::set_from_str(store.as_mut(), raw)?;
                success(format!("Daily sugar limit updated: {} g", fmt_amount(limit)));
            }
            None => {
                let limit = LimitLogic::get(store.as_mut(), cfg.default_sugar_limit)?;
                info(format!("Daily sugar limit: {} g", fmt_amount(limit)));
            }
        }
    }

    Ok(())
}
