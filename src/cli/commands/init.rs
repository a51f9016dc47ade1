use crate::cli::parser::Cli;
use crate::config::{Backend, Config, ensure_parent_dir};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::remote::RemoteStore;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema, or
///  - checks that the remote project answers
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing healthlog…");

    Config::init_all(cli.db.clone(), cli.test)?;
    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    match cfg.backend {
        Backend::Sqlite => {
            ensure_parent_dir(&cfg.database)?;
            let pool = DbPool::open(&cfg.database)?;

            if let Err(e) = log::ttlog(
                &pool.conn,
                "init",
                "database",
                &format!("Database initialized at {}", &cfg.database),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }

            success(format!("Database initialized at {}", &cfg.database));
        }
        Backend::Remote => {
            RemoteStore::from_config(cfg)?.ping()?;
            success(format!("Remote store reachable at {}", &cfg.remote_url));
        }
    }

    Ok(())
}
