//! # sheetfill-core
//!
//! In-memory workbook model for sheetfill.
//!
//! This crate provides the grid types the fill engine operates on:
//! - [`CellValue`] - A cell value (empty, integer, or text)
//! - [`Worksheet`] - A named, sparse 2-D grid with 1-based addressing
//! - [`Workbook`] - An ordered collection of uniquely named worksheets
//!
//! ## Example
//!
//! ```rust
//! use sheetfill_core::{CellValue, Workbook};
//!
//! let mut wb = Workbook::new();
//! wb.add_worksheet_with_name("Template").unwrap();
//! wb.add_worksheet_with_name("Student 1").unwrap();
//!
//! let sheet = wb.worksheet_mut(1).unwrap();
//! sheet.set_value_at(4, 4, CellValue::Int(2)).unwrap();
//! assert_eq!(sheet.value_at(4, 4), CellValue::Int(2));
//! ```

pub mod error;
pub mod value;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use error::{Error, Result};
pub use value::CellValue;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
