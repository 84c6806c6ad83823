//! Graded-team fill
//!
//! Simulates scored project work: sheets are consumed in groups of five team
//! members, each sheet is stamped with its team number and project title, and
//! the selected cells receive the full marks value or a partial-credit draw.

use std::collections::BTreeSet;

use rand::Rng;
use sheetfill_core::{CellValue, Worksheet};

use crate::error::Result;
use crate::options::FillOptions;
use crate::teams::team_for;

/// Team number lands in D4, the project title directly below it in D5.
const TEAM_CELL: (u32, u16) = (4, 4);
const PROJECT_CELL: (u32, u16) = (5, 4);

/// Partial-credit draws fall in `[marks - 3, marks - 1]` inclusive.
const PARTIAL_CREDIT_SPREAD: i64 = 3;

/// Stamp team metadata and fill marks on up to `team_count * TEAM_SIZE`
/// sheets; sheets beyond the catalog's capacity are left untouched.
///
/// With `marks < 3` the partial-credit range extends below zero; the
/// arithmetic is applied as-is, without clamping.
pub fn apply<'a, R: Rng>(
    sheets: impl Iterator<Item = &'a mut Worksheet>,
    columns: &[u16],
    rows: &BTreeSet<u32>,
    marks: i64,
    options: &FillOptions,
    rng: &mut R,
) -> Result<()> {
    for (index, sheet) in sheets.enumerate() {
        let team = team_for(index);
        if team > options.projects.team_count() {
            log::debug!(
                "project catalog exhausted after {} teams; remaining sheets left untouched",
                options.projects.team_count()
            );
            break;
        }

        let title = options.projects.title(team)?;
        sheet.set_value_at(TEAM_CELL.0, TEAM_CELL.1, CellValue::Int(team as i64))?;
        sheet.set_value_at(PROJECT_CELL.0, PROJECT_CELL.1, title)?;

        for &col in columns {
            for &row in rows {
                let value = if rng.gen::<f64>() < options.full_marks_probability {
                    marks
                } else {
                    rng.gen_range(marks - PARTIAL_CREDIT_SPREAD..=marks - 1)
                };
                sheet.set_value_at(row, col, CellValue::Int(value))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sheetfill_core::Workbook;

    fn workbook(sheet_count: usize) -> Workbook {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Template").unwrap();
        for i in 0..sheet_count {
            wb.add_worksheet_with_name(&format!("Sheet {}", i + 1))
                .unwrap();
        }
        wb
    }

    fn options() -> FillOptions {
        FillOptions::default()
    }

    #[test]
    fn test_team_numbers_advance_in_groups_of_five() {
        let mut wb = workbook(12);
        let mut rng = StdRng::seed_from_u64(1);
        let rows: BTreeSet<u32> = [2].into_iter().collect();
        let opts = options();

        apply(wb.worksheets_mut().skip(1), &[2], &rows, 5, &opts, &mut rng).unwrap();

        let teams: Vec<i64> = wb
            .worksheets()
            .skip(1)
            .map(|ws| ws.value_at(4, 4).as_int().unwrap())
            .collect();
        assert_eq!(teams, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3]);

        for (i, sheet) in wb.worksheets().skip(1).enumerate() {
            let team = i / 5 + 1;
            assert_eq!(
                sheet.value_at(5, 4).as_text().unwrap(),
                opts.projects.title(team).unwrap()
            );
        }
    }

    #[test]
    fn test_sheets_beyond_catalog_capacity_untouched() {
        let mut wb = workbook(52);
        let mut rng = StdRng::seed_from_u64(1);
        let rows: BTreeSet<u32> = [2].into_iter().collect();

        apply(
            wb.worksheets_mut().skip(1),
            &[2],
            &rows,
            5,
            &options(),
            &mut rng,
        )
        .unwrap();

        // Sheet 50 (team 10) is still stamped; sheets 51 and 52 are not.
        assert_eq!(wb.worksheet(50).unwrap().value_at(4, 4).as_int(), Some(10));
        assert!(wb.worksheet(51).unwrap().is_empty());
        assert!(wb.worksheet(52).unwrap().is_empty());
    }

    #[test]
    fn test_full_marks_when_probability_one() {
        let mut wb = workbook(3);
        let mut rng = StdRng::seed_from_u64(9);
        let rows: BTreeSet<u32> = [2, 3, 4].into_iter().collect();
        let mut opts = options();
        opts.full_marks_probability = 1.0;

        apply(wb.worksheets_mut().skip(1), &[1, 2], &rows, 5, &opts, &mut rng).unwrap();

        for sheet in wb.worksheets().skip(1) {
            for &col in &[1u16, 2] {
                for &row in &rows {
                    assert_eq!(sheet.value_at(row, col).as_int(), Some(5));
                }
            }
        }
    }

    #[test]
    fn test_partial_credit_when_probability_zero() {
        let mut wb = workbook(2);
        let mut rng = StdRng::seed_from_u64(9);
        let rows: BTreeSet<u32> = (2..=20).collect();
        let mut opts = options();
        opts.full_marks_probability = 0.0;

        apply(wb.worksheets_mut().skip(1), &[1], &rows, 5, &opts, &mut rng).unwrap();

        for sheet in wb.worksheets().skip(1) {
            for &row in &rows {
                let value = sheet.value_at(row, 1).as_int().unwrap();
                assert!((2..=4).contains(&value), "got {}", value);
            }
        }
    }

    #[test]
    fn test_low_marks_draw_below_zero() {
        let mut wb = workbook(1);
        let mut rng = StdRng::seed_from_u64(9);
        let rows: BTreeSet<u32> = (2..=30).collect();
        let mut opts = options();
        opts.full_marks_probability = 0.0;

        // marks = 0 puts the draw in [-3, -1]; the range is applied as-is
        apply(wb.worksheets_mut().skip(1), &[1], &rows, 0, &opts, &mut rng).unwrap();

        for &row in &rows {
            let value = wb.worksheet(1).unwrap().value_at(row, 1).as_int().unwrap();
            assert!((-3..=-1).contains(&value), "got {}", value);
        }
    }
}
