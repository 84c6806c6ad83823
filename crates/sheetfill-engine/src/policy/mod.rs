//! The three cell transformation policies
//!
//! Each policy consumes the target sheets with the parsed selectors and
//! mutates the addressed cells only; everything else on a sheet is left
//! as-is. Callers hand in the random source, so one policy invocation draws
//! from exactly one stream.

pub mod answers;
pub mod graded;
pub mod presence;
