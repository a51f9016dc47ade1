//! healthlog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod remote;
pub mod store;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Totals { .. } => cli::commands::totals::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Limit { .. } => cli::commands::limit::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `config` and `init` must keep working with a broken or incomplete
    // config file, so it can be repaired from the command line.
    let repairing = matches!(cli.command, Commands::Config { .. } | Commands::Init);

    // config is loaded once: file, then environment overrides
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            warning(format!("Configuration not loaded ({e}); using defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(custom_db) = &cli.db {
        cfg.use_database(custom_db);
    }

    logging::init(&cfg);
    if !repairing {
        cfg.validate()?;
    }

    dispatch(&cli, &cfg)
}
