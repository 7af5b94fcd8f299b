//! Atomic generation work items.

use crate::Pose;
use serde::{Deserialize, Serialize};

/// The atomic (garment, pose, shot) work item processed by the pipeline
/// executor.
///
/// Units are expanded in garment-major, pose-major, shot-minor order; that
/// order also defines output ordering and seed derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationUnit {
    /// Index of the garment within the batch (0 for single-garment requests).
    pub garment_index: usize,
    /// The pose to generate.
    pub pose: Pose,
    /// Shot index within the pose, starting at 0.
    pub shot_index: u32,
    /// Seed derived from the request's base seed, or `None` when no base
    /// seed was supplied.
    pub derived_seed: Option<u64>,
}

impl std::fmt::Display for GenerationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "garment {} pose {} shot {}",
            self.garment_index, self.pose, self.shot_index
        )
    }
}
