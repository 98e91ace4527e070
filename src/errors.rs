//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // Store boundary failures. A failed fetch must surface as an empty
    // state (never stale totals); a failed append means the action was
    // NOT recorded and the local working set stays untouched.
    #[error("Could not fetch time entries: {0}")]
    Fetch(#[source] rusqlite::Error),

    #[error("Could not record time entry: {0}")]
    Persistence(#[source] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid location payload: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Action not allowed: {0}")]
    NotAllowed(String),

    #[error("Invalid settings key: {0}")]
    InvalidSettingsKey(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
