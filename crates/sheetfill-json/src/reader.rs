//! JSON snapshot reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sheetfill_core::{CellValue, Workbook, Worksheet};

use crate::document::{ValueDoc, WorkbookDoc};
use crate::error::JsonResult;

/// Workbook snapshot reader
pub struct JsonReader;

impl JsonReader {
    /// Read a snapshot file into a workbook
    pub fn read_file<P: AsRef<Path>>(path: P) -> JsonResult<Workbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a snapshot from a reader into a workbook
    ///
    /// Sheet order is preserved. `null` cells are treated as absent and not
    /// stored; sheet-name problems surface as core errors.
    pub fn read<R: Read>(reader: R) -> JsonResult<Workbook> {
        let doc: WorkbookDoc = serde_json::from_reader(reader)?;

        let mut workbook = Workbook::new();
        for sheet_doc in doc.sheets {
            let mut sheet = Worksheet::new(&sheet_doc.name);
            for cell in sheet_doc.cells {
                if matches!(cell.value, ValueDoc::Null) {
                    continue;
                }
                sheet.set_value_at(cell.row, cell.col, CellValue::from(cell.value))?;
            }
            workbook.add_worksheet(sheet)?;
        }
        Ok(workbook)
    }
}
