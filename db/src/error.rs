//! Error types for dataset loading.
//!
//! Provides a unified error type covering the two fatal failure classes:
//! unreadable input files and malformed JSON. Data-quality problems inside
//! otherwise-valid input (missing lookup fields) are not errors — the
//! generators handle those per record.

use thiserror::Error;

/// Errors that can occur while loading a reference dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or conversion failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but is not an array of records.
    #[error("expected a JSON array of records in '{0}'")]
    NotAnArray(String),
}

/// Convenience alias for results with [`DatasetError`].
pub type Result<T> = std::result::Result<T, DatasetError>;
