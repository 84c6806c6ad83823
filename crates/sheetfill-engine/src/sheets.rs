//! Target sheet selection
//!
//! The first sheet of every workbook is reserved as a template/instructions
//! sheet. No policy ever reads from or writes to it; fills run over the
//! remaining sheets in insertion order.

use sheetfill_core::{Workbook, Worksheet};

/// Iterate over the sheets a fill operates on (all but the first)
pub fn targets(workbook: &Workbook) -> impl Iterator<Item = &Worksheet> {
    workbook.worksheets().skip(1)
}

/// Mutable variant of [`targets`]
pub fn targets_mut(workbook: &mut Workbook) -> impl Iterator<Item = &mut Worksheet> {
    workbook.worksheets_mut().skip(1)
}
