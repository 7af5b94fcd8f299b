//! Trained LoRA style-adapter model records.
//!
//! Training itself is an external concern; the pipeline only consumes
//! models that have already reached [`LoraStatus::Completed`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Training lifecycle of a LoRA model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoraStatus {
    Idle,
    Uploading,
    Training,
    Completed,
    Failed,
}

/// A trained style/subject adapter consumed by the single-stage path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoraModel {
    /// Model identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Training status. Only `Completed` models may generate.
    pub status: LoraStatus,
    /// Backend version id assigned once training finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    /// Trigger word baked into the adapter during training.
    pub trigger_word: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, once trained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Training error, when status is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoraModel {
    /// Whether this model is ready to generate.
    pub fn is_ready(&self) -> bool {
        self.status == LoraStatus::Completed
    }
}
