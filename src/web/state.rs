use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{EntryStore, open_store};
use std::sync::Arc;

/// Shared, immutable server state. Store handles are opened per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Run blocking store work off the async executor.
    pub async fn with_store<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut dyn EntryStore, &Config) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let cfg = Arc::clone(&self.config);

        tokio::task::spawn_blocking(move || {
            let mut store = open_store(&cfg)?;
            f(store.as_mut(), &cfg)
        })
        .await
        .map_err(|e| AppError::Other(format!("store task failed: {e}")))?
    }
}
