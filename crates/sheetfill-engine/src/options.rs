//! Fill configuration

use crate::teams::ProjectCatalog;

/// Tunable knobs for a fill run
///
/// The defaults reproduce the fixed production constants. Tests override the
/// probabilities (0.0 or 1.0) to pin otherwise-random outcomes.
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Chance that a presence-mark cell receives a "v" (default: 0.90)
    pub presence_probability: f64,
    /// Chance that a graded cell receives the full marks value rather than a
    /// partial-credit draw (default: 0.85)
    pub full_marks_probability: f64,
    /// Chance that an answer-key cell receives the correct answer rather
    /// than a wrong one (default: 0.90)
    pub correct_answer_probability: f64,
    /// Team number to project title mapping for the graded fill
    pub projects: ProjectCatalog,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            presence_probability: 0.90,
            full_marks_probability: 0.85,
            correct_answer_probability: 0.90,
            projects: ProjectCatalog::default(),
        }
    }
}
