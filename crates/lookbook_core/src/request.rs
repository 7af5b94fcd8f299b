//! Request types for generation operations.

use crate::{GarmentCategory, GenerationSettings, ImageRef, Pose, ProviderSelection};
use serde::{Deserialize, Serialize};

/// Request for the single-garment two-stage pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The garment to render onto a model.
    pub garment_image: ImageRef,
    /// Caller-supplied garment category; defaults to dresses when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garment_category: Option<GarmentCategory>,
    /// Style reference images forwarded to the generation step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_reference_images: Vec<ImageRef>,
    /// Poses to generate. Must be non-empty.
    pub poses: Vec<Pose>,
    /// Settings shared across every unit.
    pub settings: GenerationSettings,
    /// Provider identifiers for both pipeline stages.
    pub providers: ProviderSelection,
}

/// Request for batch generation across multiple garments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Garments to process, in order. Capped at ten per request.
    pub garment_images: Vec<ImageRef>,
    /// Poses to generate per garment. Must be non-empty.
    pub poses: Vec<Pose>,
    /// Settings shared across every unit.
    pub settings: GenerationSettings,
    /// Provider identifiers for the two-stage path.
    pub providers: ProviderSelection,
    /// When set, the single-stage LoRA path is used instead of the
    /// two-stage pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lora_model_id: Option<String>,
}

/// Request for a single image through the LoRA variant path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoraGenerationRequest {
    /// Identifier of the trained style model.
    pub lora_model_id: String,
    /// Optional prompt; a default is synthesized when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Optional garment image consumed directly by the trained model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garment_image: Option<ImageRef>,
    /// Pose to generate; defaults to front.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    /// Optional seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
