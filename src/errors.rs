//! Unified error types.
//! The model layer returns `ModelError`; everything above it (interchange,
//! config, core, cli) returns `AppError` to keep error handling in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Lesson on {date} is marked as replaced but has no replacement date")]
    MissingReplacementDate { date: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Interchange formats
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    // ---------------------------
    // Model
    // ---------------------------
    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0} row(s) could not be converted")]
    InvalidRows(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Conversion cancelled: '{path}' left untouched")]
    Cancelled { path: String },

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
