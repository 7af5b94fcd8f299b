//! Persisted generation sessions and their history projection.

use crate::{GeneratedImage, GenerationSettings, ImageRef, ProviderSelection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted, append-only record grouping generated images with the
/// settings that produced them.
///
/// `generated_images` grows monotonically: elements are never rewritten or
/// removed in place. Sessions are deleted whole, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSession {
    /// Server-generated session id.
    pub id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last append.
    pub updated_at: DateTime<Utc>,
    /// Source garment images.
    pub garment_images: Vec<ImageRef>,
    /// Append-only list of generated images.
    pub generated_images: Vec<GeneratedImage>,
    /// Settings the session was created with.
    pub settings: GenerationSettings,
    /// Provider selection the session was created with.
    pub providers: ProviderSelection,
    /// LoRA model used, when the single-stage path produced this session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lora_model_id: Option<String>,
}

impl GenerationSession {
    /// Create an empty session with a fresh id.
    pub fn new(
        garment_images: Vec<ImageRef>,
        settings: GenerationSettings,
        providers: ProviderSelection,
        lora_model_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            garment_images,
            generated_images: Vec::new(),
            settings,
            providers,
            lora_model_id,
        }
    }

    /// Projection of this session into a history item, reflecting its
    /// state as of the last append.
    pub fn history_item(&self) -> HistoryItem {
        HistoryItem {
            id: self.id,
            session_id: self.id,
            timestamp: self.updated_at,
            thumbnail: self.generated_images.first().map(|img| img.image.clone()),
            garment_count: self.garment_images.len(),
            image_count: self.generated_images.len(),
            status: SessionStatus::Completed,
        }
    }
}

/// Lifecycle status recorded on a history item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionStatus {
    /// At least one append completed.
    Completed,
    /// The session's generation failed outright.
    Failed,
    /// Generation is still running.
    InProgress,
}

/// History projection of a session, derived at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Item id (same as the session id).
    pub id: Uuid,
    /// The session this item projects.
    pub session_id: Uuid,
    /// Time of the last append.
    pub timestamp: DateTime<Utc>,
    /// First generated image, when any exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageRef>,
    /// Number of source garments.
    pub garment_count: usize,
    /// Session length as of the last append.
    pub image_count: usize,
    /// Session status.
    pub status: SessionStatus,
}
