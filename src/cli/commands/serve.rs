use crate::cli::parser::Commands;
use crate::config::{Backend, Config, ensure_parent_dir};
use crate::errors::AppResult;
use crate::web;

/// Start the web UI on a multi-threaded tokio runtime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(b) = bind {
            cfg.bind = b.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        if cfg.backend == Backend::Sqlite {
            ensure_parent_dir(&cfg.database)?;
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(web::serve(cfg))?;
    }

    Ok(())
}
