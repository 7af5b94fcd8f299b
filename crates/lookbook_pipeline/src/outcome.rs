//! Per-unit execution outcomes.

use lookbook_core::{GeneratedImage, GenerationUnit};

/// Result of running one generation unit.
///
/// A failed unit never aborts its siblings; the executor collects outcomes
/// and aggregation decides whether the request as a whole succeeded.
#[derive(Debug, Clone)]
pub enum UnitOutcome {
    /// The unit produced an image (composited or fallback).
    Succeeded(GeneratedImage),
    /// The unit produced nothing; `reason` feeds the warning list.
    Failed {
        /// The unit that failed.
        unit: GenerationUnit,
        /// Human-readable failure description.
        reason: String,
    },
}

impl UnitOutcome {
    /// Whether this outcome carries an image.
    pub fn is_success(&self) -> bool {
        matches!(self, UnitOutcome::Succeeded(_))
    }
}
