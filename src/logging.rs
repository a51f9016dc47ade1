//! Diagnostic logging via `tracing`.
//!
//! `RUST_LOG` wins over the configured `log_filter`. Output goes to stderr so
//! command output on stdout stays machine-readable.

use crate::config::Config;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests calling run() twice) is not an error worth reporting.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
