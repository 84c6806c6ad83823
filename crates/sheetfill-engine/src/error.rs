//! Error types for sheetfill-engine

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or applying a fill
///
/// Selector and parameter problems are reported before any cell is written;
/// a failed fill never leaves a workbook partially validated. Write errors
/// from the underlying grid propagate through [`Error::Sheet`].
#[derive(Debug, Error)]
pub enum Error {
    /// Column token is not a single letter A-Z
    #[error("Invalid column '{0}': expected a single letter A-Z")]
    InvalidColumn(String),

    /// Row token is not a positive base-10 integer
    #[error("Invalid row '{0}': expected a positive integer")]
    InvalidRow(String),

    /// Mode string is not one of the supported fill modes
    #[error("Unknown fill mode: {0}")]
    UnknownMode(String),

    /// The graded fill mode was requested without a marks value
    #[error("A marks value is required for the graded fill mode")]
    MissingMarks,

    /// Marks must be non-negative
    #[error("Marks must be non-negative, got {0}")]
    NegativeMarks(i64),

    /// The answer-key fill mode was requested without a reference column
    #[error("A reference column is required for the answer-key fill mode")]
    MissingRefColumn,

    /// Team number has no project catalog entry
    #[error("No project is defined for team {0}")]
    UnknownTeam(usize),

    /// Cell write rejected by the workbook model
    #[error(transparent)]
    Sheet(#[from] sheetfill_core::Error),
}
