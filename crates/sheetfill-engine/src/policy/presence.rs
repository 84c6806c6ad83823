//! Presence-mark fill
//!
//! Simulates attendance-style data: most of the expected cells carry a "v",
//! a realistic fraction stay blank.

use std::collections::BTreeSet;

use rand::Rng;
use sheetfill_core::Worksheet;

use crate::error::Result;

/// For every (sheet, column, row) triple, write `"v"` with the given
/// probability; cells that lose the draw keep their existing value.
pub fn apply<'a, R: Rng>(
    sheets: impl Iterator<Item = &'a mut Worksheet>,
    columns: &[u16],
    rows: &BTreeSet<u32>,
    probability: f64,
    rng: &mut R,
) -> Result<()> {
    for sheet in sheets {
        for &col in columns {
            for &row in rows {
                if rng.gen::<f64>() < probability {
                    sheet.set_value_at(row, col, "v")?;
                }
            }
        }
    }
    Ok(())
}
