//! # sheetfill-json
//!
//! JSON snapshot reader and writer for sheetfill workbooks.
//!
//! The format is a plain JSON document: a workbook is a list of named
//! sheets, each carrying its non-empty cells as `{row, col, value}` triples
//! with 1-based coordinates. Values are JSON integers, strings, or `null`
//! (treated as absent on read).

mod document;
mod error;
mod options;
mod reader;
mod writer;

pub use document::{CellDoc, SheetDoc, ValueDoc, WorkbookDoc};
pub use error::{JsonError, JsonResult};
pub use options::JsonWriteOptions;
pub use reader::JsonReader;
pub use writer::JsonWriter;
