//! Unified application error type.
//! Loader, filter, statistics, export and CLI layers all return AppError so
//! the binary can report every failure the same way.

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
    // Data source
    // ---------------------------
    #[error("No data source for city '{city}': {reason}")]
    SourceNotFound { city: String, reason: String },

    #[error("Required column '{column}' is missing from the data source")]
    MissingColumn { column: String },

    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Row {row}: cannot parse '{value}' in column '{column}' as a timestamp")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    // ---------------------------
    // Statistics
    // ---------------------------
    #[error("Cannot compute {report}: the dataset has no records")]
    EmptyDataset { report: &'static str },

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
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Errors the interactive loop can recover from by skipping or re-filtering.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::EmptyDataset { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
