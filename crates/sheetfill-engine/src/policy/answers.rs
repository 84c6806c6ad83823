//! Answer-key fill
//!
//! Simulates multiple-choice answer sheets: the correct answer for each row
//! lives in a reference column; target cells receive the correct value most
//! of the time and one of the three wrong values otherwise.

use std::collections::BTreeSet;

use rand::Rng;
use sheetfill_core::{CellValue, Worksheet};

use crate::error::Result;

/// Valid answer keys are the integers 1 through 4.
const CHOICES: std::ops::RangeInclusive<i64> = 1..=4;

/// For every selected cell, copy the reference answer with the given
/// probability, otherwise substitute a uniformly chosen wrong answer.
///
/// Rows whose reference cell does not hold an integer in 1..=4 are skipped
/// entirely; their target cells keep whatever they held before.
pub fn apply<'a, R: Rng>(
    sheets: impl Iterator<Item = &'a mut Worksheet>,
    columns: &[u16],
    rows: &BTreeSet<u32>,
    ref_column: u16,
    probability: f64,
    rng: &mut R,
) -> Result<()> {
    for sheet in sheets {
        for &col in columns {
            for &row in rows {
                let correct = match sheet.value_at(row, ref_column) {
                    CellValue::Int(v) if CHOICES.contains(&v) => v,
                    _ => continue,
                };

                let answer = if rng.gen::<f64>() < probability {
                    correct
                } else {
                    let wrong: Vec<i64> = CHOICES.filter(|&v| v != correct).collect();
                    wrong[rng.gen_range(0..wrong.len())]
                };
                sheet.set_value_at(row, col, CellValue::Int(answer))?;
            }
        }
    }
    Ok(())
}
