//! # sheetfill
//!
//! Bulk-fill spreadsheet workbooks with synthetic data.
//!
//! Given a workbook whose first sheet is a template and whose remaining
//! sheets are near-identical data sheets (one per student or team),
//! sheetfill populates a user-selected set of rows and columns on every
//! data sheet under one of three randomized policies: presence marks,
//! graded marks with team/project metadata, or multiple-choice answers
//! derived from a reference column.
//!
//! ## Example
//!
//! ```rust
//! use sheetfill::prelude::*;
//!
//! let mut wb = Workbook::new();
//! wb.add_worksheet_with_name("Template").unwrap();
//! wb.add_worksheet_with_name("Team A - Alice").unwrap();
//! wb.add_worksheet_with_name("Team A - Bob").unwrap();
//!
//! // Fill columns B and C, rows 2-20, with graded marks out of 5
//! let request = FillRequest::new(Mode::GradedTeam, "B,C", "2-20").with_marks(5);
//! let mut filler = Filler::new(FillOptions::default());
//! filler.fill(&mut wb, &request).unwrap();
//!
//! // Every data sheet now carries its team number in D4
//! assert_eq!(wb.worksheet(1).unwrap().value_at(4, 4).as_int(), Some(1));
//! ```

pub mod prelude;

// Re-export core types
pub use sheetfill_core::{
    CellValue, Error as CoreError, Result as CoreResult, Workbook, Worksheet, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export the engine
pub use sheetfill_engine::{
    selector, sheets, teams, Error, FillOptions, FillRequest, Filler, Mode, ProjectCatalog, Result,
};

// Re-export the JSON snapshot codec
pub use sheetfill_json::{JsonError, JsonReader, JsonResult, JsonWriteOptions, JsonWriter};
