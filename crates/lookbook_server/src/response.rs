//! Wire response envelopes.

use lookbook_core::{BatchResult, BatchSummary, GeneratedImage, HistoryItem};
use serde::Serialize;
use uuid::Uuid;

/// Response for single-garment generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub images: Vec<GeneratedImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// Response for batch generation.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub results: Vec<BatchResult>,
    pub summary: BatchSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// Response for single-image LoRA generation.
#[derive(Debug, Clone, Serialize)]
pub struct LoraGenerateResponse {
    pub success: bool,
    pub image: GeneratedImage,
}

/// Response listing generation history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryItem>,
}

/// Response listing registered provider identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersResponse {
    pub image_generation: Vec<String>,
    pub try_on: Vec<String>,
    pub lora: bool,
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    /// Build an error envelope from any displayable error.
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}
