//! Batch result types.

use crate::{GeneratedImage, ImageRef};
use serde::{Deserialize, Serialize};

/// Outcome for one garment within a batch.
///
/// `generated_images` is empty exactly when `error` is set or zero units of
/// the garment succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Position of the garment in the request.
    pub garment_index: usize,
    /// Shortened reference to the source garment image.
    pub garment_thumbnail: ImageRef,
    /// Images generated for this garment.
    pub generated_images: Vec<GeneratedImage>,
    /// Error string when the garment produced nothing usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate counts over a whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Garments in the request.
    pub total_garments: usize,
    /// Sum of all succeeded images across garments.
    pub total_generated: usize,
    /// Garments with a recorded error.
    pub failed_count: usize,
}

impl BatchSummary {
    /// Compute a summary from per-garment results.
    pub fn from_results(results: &[BatchResult]) -> Self {
        Self {
            total_garments: results.len(),
            total_generated: results.iter().map(|r| r.generated_images.len()).sum(),
            failed_count: results.iter().filter(|r| r.error.is_some()).count(),
        }
    }
}
