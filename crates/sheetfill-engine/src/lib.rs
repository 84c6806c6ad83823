//! # sheetfill-engine
//!
//! The cell-selection and fill engine: parses user-entered row/column
//! selectors, walks every data sheet of a workbook (the first sheet is a
//! template and is never touched), and populates the selected cells with
//! synthetic values under one of three randomized policies:
//!
//! - **Presence mark** - write a literal `"v"` into most selected cells,
//!   leaving a realistic fraction blank.
//! - **Graded team** - assign team numbers and project titles in groups of
//!   five sheets, and write full or partial marks into the selected cells.
//! - **Answer key** - copy a multiple-choice answer from a reference column,
//!   occasionally substituting a wrong one.
//!
//! All randomness flows through an injected [`rand::Rng`], so callers can
//! seed runs for reproducibility and tests can pin outcomes via the
//! probability knobs on [`FillOptions`].
//!
//! ## Example
//!
//! ```rust
//! use sheetfill_core::Workbook;
//! use sheetfill_engine::{FillOptions, FillRequest, Filler, Mode};
//!
//! let mut wb = Workbook::new();
//! wb.add_worksheet_with_name("Template").unwrap();
//! wb.add_worksheet_with_name("Student 1").unwrap();
//!
//! let request = FillRequest::new(Mode::PresenceMark, "B,C", "2,5-9");
//! Filler::new(FillOptions::default())
//!     .fill(&mut wb, &request)
//!     .unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod policy;
pub mod request;
pub mod selector;
pub mod sheets;
pub mod teams;

// Re-exports for convenience
pub use engine::Filler;
pub use error::{Error, Result};
pub use options::FillOptions;
pub use request::{FillRequest, Mode};
pub use teams::ProjectCatalog;
