//! JSON snapshot writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sheetfill_core::Workbook;

use crate::document::{CellDoc, SheetDoc, WorkbookDoc};
use crate::error::JsonResult;
use crate::options::JsonWriteOptions;

/// Workbook snapshot writer
pub struct JsonWriter;

impl JsonWriter {
    /// Write a workbook snapshot to a file
    pub fn write_file<P: AsRef<Path>>(
        workbook: &Workbook,
        path: P,
        options: &JsonWriteOptions,
    ) -> JsonResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, BufWriter::new(file), options)
    }

    /// Write a workbook snapshot to a writer
    ///
    /// Only stored (non-empty) cells are emitted, in row-major order.
    pub fn write<W: Write>(
        workbook: &Workbook,
        writer: W,
        options: &JsonWriteOptions,
    ) -> JsonResult<()> {
        let doc = WorkbookDoc {
            sheets: workbook
                .worksheets()
                .map(|sheet| SheetDoc {
                    name: sheet.name().to_string(),
                    cells: sheet
                        .cells()
                        .map(|(row, col, value)| CellDoc {
                            row,
                            col,
                            value: value.into(),
                        })
                        .collect(),
                })
                .collect(),
        };

        if options.pretty {
            serde_json::to_writer_pretty(writer, &doc)?;
        } else {
            serde_json::to_writer(writer, &doc)?;
        }
        Ok(())
    }
}
