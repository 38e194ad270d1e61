//! Unified application error type.
//! All modules (core, sheet, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required columns {0:?} are not found in the sheet")]
    MissingColumns(Vec<String>),

    // ---------------------------
    // Table / sheet errors
    // ---------------------------
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    #[error(
        "Overlapping with existing sheet values is detected ({0} already present). Check input date range."
    )]
    Overlap(String),

    #[error("Sheet error: {0}")]
    Sheet(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
