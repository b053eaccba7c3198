//! Error types for haulcalc

use thiserror::Error;

/// A required field could not be interpreted as the expected type, or a
/// needed external value (route distance) could not be obtained.
///
/// Recovered at the boundary: the calculation is abandoned and reported,
/// the process stays usable for the next attempt.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{field}' is not a valid number: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("'{field}' must be a non-negative number, got {value}")]
    NegativeNumber { field: String, value: f64 },

    #[error("'{field}' must not be empty")]
    EmptyField { field: String },

    #[error("row {row}: column '{column}' is not a valid number: {value:?}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("no distance available for route {origin} -> {destination}")]
    UnresolvedRoute { origin: String, destination: String },

    #[error("total distance is zero, rate per mile is undefined")]
    ZeroDistance,
}

/// A batch input table is missing one or more required columns.
///
/// Raised before any computation; no partial table is ever produced.
#[derive(Debug, Error)]
#[error("missing required columns: {}", missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
