use crate::errors::{AppError, AppResult};
use crate::models::DEFAULT_SUGAR_LIMIT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Which store backs the `entries` and `settings` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Remote,
}

impl Backend {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "local" => Some(Backend::Sqlite),
            "remote" | "supabase" => Some(Backend::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub remote_url: String,
    #[serde(default)]
    pub remote_key: String,
    #[serde(default = "default_sugar_limit")]
    pub default_sugar_limit: f64,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_sugar_limit() -> f64 {
    DEFAULT_SUGAR_LIMIT
}
fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Sqlite,
            database: default_database(),
            remote_url: String::new(),
            remote_key: String::new(),
            default_sugar_limit: default_sugar_limit(),
            bind: default_bind(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Return the configuration directory.
    ///
    /// `$HEALTHLOG_HOME` wins; otherwise `%APPDATA%\healthlog` on Windows and
    /// `~/.healthlog` elsewhere.
    pub fn config_dir() -> PathBuf {
        if let Ok(home) = env::var("HEALTHLOG_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("healthlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".healthlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("healthlog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("healthlog.sqlite")
    }

    /// Load configuration from file (defaults when missing), then apply
    /// environment overrides.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            Self::from_file(&path)?
        } else {
            Config::default()
        };

        cfg.apply_env(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply `SUPABASE_URL`, `SUPABASE_KEY`, `HEALTHLOG_BACKEND` and `PORT`.
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("SUPABASE_URL") {
            self.remote_url = url;
        }
        if let Some(key) = non_empty("SUPABASE_KEY") {
            self.remote_key = key;
        }
        if let Some(name) = non_empty("HEALTHLOG_BACKEND") {
            self.backend = Backend::from_name(&name)
                .ok_or_else(|| AppError::Config(format!("Unknown backend '{name}'")))?;
        }
        if let Some(port) = non_empty("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("Invalid PORT value '{port}'")))?;
        }

        Ok(())
    }

    /// Point the configuration at a specific SQLite file.
    pub fn use_database(&mut self, path: &str) {
        self.backend = Backend::Sqlite;
        self.database = path.to_string();
    }

    /// Check that the selected backend has what it needs.
    pub fn validate(&self) -> AppResult<()> {
        match self.backend {
            Backend::Sqlite if self.database.trim().is_empty() => {
                Err(AppError::Config("database path is empty".into()))
            }
            Backend::Remote if self.remote_url.is_empty() || self.remote_key.is_empty() => Err(
                AppError::Config("Missing SUPABASE_URL or SUPABASE_KEY for the remote backend".into()),
            ),
            _ if !(self.default_sugar_limit.is_finite() && self.default_sugar_limit > 0.0) => Err(
                AppError::Config("default_sugar_limit must be > 0".into()),
            ),
            _ => Ok(()),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::from_file(&Self::config_file())?
        } else {
            Config::default()
        };

        // same path the running command uses for --db
        if let Some(name) = custom_db {
            config.use_database(&name);
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Remote key shown as `abcd…` so printed configs can be shared.
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if !out.remote_key.is_empty() {
            let prefix: String = out.remote_key.chars().take(4).collect();
            out.remote_key = format!("{prefix}…");
        }
        out
    }
}

/// Create the directory holding `path` when it does not exist.
pub fn ensure_parent_dir(path: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
