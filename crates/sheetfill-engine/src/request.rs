//! Fill request types

use std::str::FromStr;

use crate::error::Error;

/// Which fill policy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mark ~90% of the selected cells with a literal "v"
    PresenceMark,
    /// Assign team numbers and project titles, fill marks with occasional
    /// partial credit
    GradedTeam,
    /// Copy multiple-choice answers from a reference column, occasionally
    /// substituting a wrong one
    AnswerKey,
}

impl FromStr for Mode {
    type Err = Error;

    /// Accepts the form-value selectors "1"/"2"/"3" as well as readable names
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "1" | "presence" => Ok(Mode::PresenceMark),
            "2" | "graded" => Ok(Mode::GradedTeam),
            "3" | "answers" => Ok(Mode::AnswerKey),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// One fill invocation: the chosen mode, the raw selector text, and the
/// mode-specific parameters
///
/// `marks` is consulted only by [`Mode::GradedTeam`] and `ref_column` only by
/// [`Mode::AnswerKey`]; a missing required parameter fails validation before
/// any cell is written.
#[derive(Debug, Clone)]
pub struct FillRequest {
    /// Fill policy to run
    pub mode: Mode,
    /// Column selector text, e.g. "A,C,F"
    pub columns: String,
    /// Row selector text, e.g. "2,5-9,12"
    pub rows: String,
    /// Full-marks value for the graded fill
    pub marks: Option<i64>,
    /// Reference column letter for the answer-key fill
    pub ref_column: Option<String>,
}

impl FillRequest {
    /// Create a request with no mode-specific parameters
    pub fn new<C: Into<String>, R: Into<String>>(mode: Mode, columns: C, rows: R) -> Self {
        Self {
            mode,
            columns: columns.into(),
            rows: rows.into(),
            marks: None,
            ref_column: None,
        }
    }

    /// Set the full-marks value (graded fill)
    pub fn with_marks(mut self, marks: i64) -> Self {
        self.marks = Some(marks);
        self
    }

    /// Set the reference column letter (answer-key fill)
    pub fn with_ref_column<S: Into<String>>(mut self, ref_column: S) -> Self {
        self.ref_column = Some(ref_column.into());
        self
    }
}
