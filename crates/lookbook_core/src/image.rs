//! Generated image records.

use crate::{GenerationSettings, ImageRef, Pose};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated output image. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Globally unique identifier.
    pub id: Uuid,
    /// Reference to the produced image.
    pub image: ImageRef,
    /// Pose this image was generated for.
    pub pose: Pose,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Snapshot of the settings that produced this image.
    pub settings: GenerationSettings,
    /// Provider label: `"{image_gen} + {try_on}"` when composited, or the
    /// image-generation provider name alone on fallback.
    pub provider: String,
}

impl GeneratedImage {
    /// Create a new image record with a fresh id and current timestamp.
    pub fn new(
        image: ImageRef,
        pose: Pose,
        settings: GenerationSettings,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            pose,
            created_at: Utc::now(),
            settings,
            provider: provider.into(),
        }
    }
}
