//! JSON codec error types

use thiserror::Error;

/// Result type for JSON snapshot operations
pub type JsonResult<T> = std::result::Result<T, JsonError>;

/// Errors that can occur while reading or writing workbook snapshots
#[derive(Debug, Error)]
pub enum JsonError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error (invalid sheet name, cell out of bounds, ...)
    #[error("Core error: {0}")]
    Core(#[from] sheetfill_core::Error),
}
