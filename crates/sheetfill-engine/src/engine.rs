//! The fill engine facade
//!
//! [`Filler`] ties the pieces together: it parses and validates a
//! [`FillRequest`] up front, then dispatches exactly one policy over the
//! target sheets. Validation always completes before the first cell write,
//! so a failed request leaves the workbook untouched.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sheetfill_core::{Workbook, Worksheet};

use crate::error::{Error, Result};
use crate::options::FillOptions;
use crate::policy;
use crate::request::{FillRequest, Mode};
use crate::selector;
use crate::sheets;

/// A validated fill, ready to run
#[derive(Debug)]
struct Plan {
    columns: Vec<u16>,
    rows: BTreeSet<u32>,
    action: Action,
}

#[derive(Debug)]
enum Action {
    Presence,
    Graded { marks: i64 },
    Answers { ref_column: u16 },
}

impl Plan {
    fn prepare(request: &FillRequest) -> Result<Plan> {
        let columns = selector::parse_columns(&request.columns)?;
        let rows = selector::parse_rows(&request.rows)?;

        let action = match request.mode {
            Mode::PresenceMark => Action::Presence,
            Mode::GradedTeam => {
                let marks = request.marks.ok_or(Error::MissingMarks)?;
                if marks < 0 {
                    return Err(Error::NegativeMarks(marks));
                }
                Action::Graded { marks }
            }
            Mode::AnswerKey => {
                let ref_column = match request.ref_column.as_deref().map(str::trim) {
                    None | Some("") => return Err(Error::MissingRefColumn),
                    Some(letter) => selector::parse_column(letter)?,
                };
                Action::Answers { ref_column }
            }
        };

        Ok(Plan {
            columns,
            rows,
            action,
        })
    }
}

/// The fill engine
///
/// Owns the configuration and the random source for one or more runs. Use
/// [`Filler::new`] for an entropy-seeded engine, or [`Filler::with_rng`] to
/// inject a seeded generator for reproducible output.
#[derive(Debug)]
pub struct Filler<R: Rng = StdRng> {
    options: FillOptions,
    rng: R,
}

impl Filler<StdRng> {
    /// Create an engine with a fresh entropy-seeded random source
    pub fn new(options: FillOptions) -> Self {
        Self::with_rng(options, StdRng::from_entropy())
    }

    /// Create an engine whose random stream is derived from `seed`
    pub fn from_seed(options: FillOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Filler<R> {
    /// Create an engine with an explicit random source
    pub fn with_rng(options: FillOptions, rng: R) -> Self {
        Self { options, rng }
    }

    /// Get the engine configuration
    pub fn options(&self) -> &FillOptions {
        &self.options
    }

    /// Run one fill over `workbook`, mutating the addressed cells in place
    ///
    /// The first sheet is never touched. Selector or parameter errors are
    /// returned before any mutation.
    pub fn fill(&mut self, workbook: &mut Workbook, request: &FillRequest) -> Result<()> {
        let plan = Plan::prepare(request)?;
        self.apply(workbook, &plan)
    }

    /// Run one fill against a read-only source, returning a freshly built
    /// workbook with identical sheet names/order and contents plus the
    /// applied mutations
    pub fn fill_into_copy(&mut self, source: &Workbook, request: &FillRequest) -> Result<Workbook> {
        let plan = Plan::prepare(request)?;
        let mut copy = rebuild(source)?;
        self.apply(&mut copy, &plan)?;
        Ok(copy)
    }

    fn apply(&mut self, workbook: &mut Workbook, plan: &Plan) -> Result<()> {
        log::debug!(
            "filling {} target sheets: {} columns x {} rows, {:?}",
            workbook.sheet_count().saturating_sub(1),
            plan.columns.len(),
            plan.rows.len(),
            plan.action
        );

        let targets = sheets::targets_mut(workbook);
        match plan.action {
            Action::Presence => policy::presence::apply(
                targets,
                &plan.columns,
                &plan.rows,
                self.options.presence_probability,
                &mut self.rng,
            ),
            Action::Graded { marks } => policy::graded::apply(
                targets,
                &plan.columns,
                &plan.rows,
                marks,
                &self.options,
                &mut self.rng,
            ),
            Action::Answers { ref_column } => policy::answers::apply(
                targets,
                &plan.columns,
                &plan.rows,
                ref_column,
                self.options.correct_answer_probability,
                &mut self.rng,
            ),
        }
    }
}

/// Rebuild a workbook value-for-value: same sheet names and order, each
/// sheet's full cell contents copied across
fn rebuild(source: &Workbook) -> Result<Workbook> {
    let mut out = Workbook::new();
    for sheet in source.worksheets() {
        let mut copy = Worksheet::new(sheet.name());
        for (row, col, value) in sheet.cells() {
            copy.set_value_at(row, col, value.clone())?;
        }
        out.add_worksheet(copy)?;
    }
    Ok(out)
}
