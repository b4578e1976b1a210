//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying the air-quality dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Lookup Errors ===
    /// Requested key is not one of the dataset's logical columns.
    #[error("invalid key '{key}', expected one of: {expected}")]
    UnknownKey { key: String, expected: String },

    // === File System Errors ===
    /// Dataset file not found.
    #[error("air-quality dataset not found at {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV parsed but holds no data rows.
    #[error("air-quality dataset is empty: {path}")]
    EmptyDataset { path: PathBuf },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Cache Errors ===
    /// Another thread panicked while holding the cache lock.
    #[error("dataset cache lock poisoned")]
    CachePoisoned,
}

impl IngestError {
    /// Returns true for errors caused by the content of a dataset that exists.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::CsvParse { .. }
                | Self::EmptyDataset { .. }
                | Self::ColumnNotFound { .. }
                | Self::DataFrame { .. }
        )
    }
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
