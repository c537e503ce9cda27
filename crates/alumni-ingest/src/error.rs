//! Error types for alumni data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use alumni_model::ModelError;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte order mark for an encoding we cannot read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Record Errors ===
    /// Required column not found in the header.
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },

    /// A required cell is null or blank.
    #[error("row {row}: missing value for '{column}'")]
    MissingValue { column: &'static str, row: usize },

    /// Points cell could not be read as a number.
    #[error("row {row}: points value '{value}' is not numeric")]
    InvalidPoints { row: usize, value: String },

    /// Row failed model validation.
    #[error(transparent)]
    InvalidRecord(#[from] ModelError),

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
