//! Convenience re-exports for common usage
//!
//! ```rust
//! use sheetfill::prelude::*;
//! ```

pub use sheetfill_core::{CellValue, Workbook, Worksheet};
pub use sheetfill_engine::{FillOptions, FillRequest, Filler, Mode, ProjectCatalog};
pub use sheetfill_json::{JsonReader, JsonWriteOptions, JsonWriter};
