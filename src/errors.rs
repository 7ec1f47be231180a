//! Unified application error type.
//! Models, collection, config and CLI all return AppError so the error
//! handling stays consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid movement id: {0}")]
    InvalidId(String),

    #[error("Invalid timestamp (expected YYYY-MM-DD HH:MM:SS): {0}")]
    InvalidTimestamp(String),

    #[error("Invalid workplace flag (expected true/false): {0}")]
    InvalidWorkplace(String),

    #[error("Invalid room number: {0}")]
    InvalidRoom(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Collection errors
    // ---------------------------
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

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

impl AppError {
    /// True for the errors raised while converting raw field text into a movement.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidId(_)
                | AppError::InvalidTimestamp(_)
                | AppError::InvalidWorkplace(_)
                | AppError::InvalidRoom(_)
                | AppError::MissingColumn(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
