//! Wire-format types for workbook snapshots

use serde::{Deserialize, Serialize};
use sheetfill_core::CellValue;

/// A complete workbook snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookDoc {
    /// Sheets in workbook order; the first is the template sheet
    pub sheets: Vec<SheetDoc>,
}

/// One sheet: a name plus its non-empty cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDoc {
    /// Sheet name (unique within the workbook)
    pub name: String,
    /// Stored cells in row-major order
    #[serde(default)]
    pub cells: Vec<CellDoc>,
}

/// One cell with 1-based coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellDoc {
    pub row: u32,
    pub col: u16,
    pub value: ValueDoc,
}

/// A cell value on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueDoc {
    /// Absent cell; skipped on read, never written
    Null,
    Int(i64),
    Text(String),
}

impl From<&CellValue> for ValueDoc {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Empty => ValueDoc::Null,
            CellValue::Int(n) => ValueDoc::Int(*n),
            CellValue::Text(s) => ValueDoc::Text(s.clone()),
        }
    }
}

impl From<ValueDoc> for CellValue {
    fn from(value: ValueDoc) -> Self {
        match value {
            ValueDoc::Null => CellValue::Empty,
            ValueDoc::Int(n) => CellValue::Int(n),
            ValueDoc::Text(s) => CellValue::Text(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_doc_untagged_forms() {
        let cell: CellDoc = serde_json::from_str(r#"{"row":1,"col":2,"value":7}"#).unwrap();
        assert!(matches!(cell.value, ValueDoc::Int(7)));

        let cell: CellDoc = serde_json::from_str(r#"{"row":1,"col":2,"value":"v"}"#).unwrap();
        assert!(matches!(cell.value, ValueDoc::Text(ref s) if s == "v"));

        let cell: CellDoc = serde_json::from_str(r#"{"row":1,"col":2,"value":null}"#).unwrap();
        assert!(matches!(cell.value, ValueDoc::Null));
    }

    #[test]
    fn test_sheet_doc_cells_default_to_empty() {
        let sheet: SheetDoc = serde_json::from_str(r#"{"name":"Template"}"#).unwrap();
        assert!(sheet.cells.is_empty());
    }
}
