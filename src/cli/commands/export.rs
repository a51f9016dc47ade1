use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ExportLogic;
use crate::errors::AppResult;
use crate::store::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        ExportLogic::export(store.as_mut(), *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
