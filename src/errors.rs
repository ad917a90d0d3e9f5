//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Caller input
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Timer state machine
    // ---------------------------
    #[error("Operation not allowed: {0}")]
    InvalidState(String),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("No entry with id '{0}'")]
    UnknownEntry(String),

    #[error("No project with id '{0}'")]
    UnknownProject(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
