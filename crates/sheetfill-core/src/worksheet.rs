//! Worksheet type
//!
//! Cells are stored sparsely in a row-based BTreeMap structure; only
//! non-empty cells occupy memory, and iteration is row-major in ascending
//! order. Addresses are 1-based in both dimensions, matching how the sheets
//! are described by the users who select rows and columns to fill.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Row index -> column map; only non-empty cells are stored
    rows: BTreeMap<u32, BTreeMap<u16, CellValue>>,
}

impl Worksheet {
    /// Create a new empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell value by 1-based row and column indices
    ///
    /// Absent cells read as [`CellValue::Empty`].
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.rows
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value by 1-based row and column indices
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        self.validate_position(row, col)?;

        let value = value.into();
        if value.is_empty() {
            // Storing Empty is the same as clearing; keep the map sparse.
            self.clear_at(row, col);
            return Ok(());
        }

        self.rows.entry(row).or_default().insert(col, value);
        Ok(())
    }

    /// Clear a cell by 1-based row and column indices
    pub fn clear_at(&mut self, row: u32, col: u16) {
        if let Some(cols) = self.rows.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    /// Check if the sheet has no stored cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of stored (non-empty) cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|cols| cols.len()).sum()
    }

    /// Iterate over all stored cells in row-major order as (row, col, value)
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, value)| (row, col, value))
        })
    }

    /// Get the bounds of all stored cells as (min_row, min_col, max_row, max_col)
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0;
        for cols in self.rows.values() {
            if let (Some(&first), Some(&last)) = (cols.keys().next(), cols.keys().next_back()) {
                min_col = min_col.min(first);
                max_col = max_col.max(last);
            }
        }

        Some((min_row, min_col, max_row, max_col))
    }

    fn validate_position(&self, row: u32, col: u16) -> Result<()> {
        if row == 0 || row > MAX_ROWS || col == 0 || col > MAX_COLS {
            return Err(Error::CellOutOfBounds(row, col));
        }
        Ok(())
    }
}
