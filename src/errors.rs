//! Unified application error type.
//! All modules (db, remote, core, cli, web) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Remote store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store returned {status}: {body}")]
    Remote { status: u16, body: String },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // User input
    // ---------------------------
    /// Message meant to be shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Backend capabilities
    // ---------------------------
    #[error("Operation not supported by the {backend} backend: {operation}")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AppError::Validation(msg.into())
    }

    /// True for errors caused by what the user typed, as opposed to store or I/O failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidDate(_) | AppError::InvalidTimestamp(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
