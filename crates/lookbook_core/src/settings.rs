//! Generation settings and provider selection.

use serde::{Deserialize, Serialize};

/// Negative prompt applied when the caller supplies none.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "low quality, blurry, distorted, deformed, ugly, \
     bad anatomy, bad proportions, extra limbs, watermark, signature, text, logo, \
     cropped head, cut off head, head out of frame, feet cut off, \
     oversaturated, artificial lighting";

/// Visual style for generated model images.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModelStyle {
    /// Natural handheld-phone photography look.
    #[default]
    IphoneNatural,
    /// Studio lighting against a seamless backdrop.
    Studio,
    /// Casual everyday environment.
    Casual,
}

impl ModelStyle {
    /// Prompt fragment describing this style.
    pub fn prompt_fragment(&self) -> &'static str {
        match self {
            ModelStyle::IphoneNatural => {
                "iPhone photography style, natural lighting, subtle color grading, \
                 natural skin texture"
            }
            ModelStyle::Studio => {
                "studio photography, seamless backdrop, professional softbox lighting, \
                 crisp shadows"
            }
            ModelStyle::Casual => {
                "casual everyday snapshot, candid framing, ambient daylight"
            }
        }
    }
}

/// Settings shared by every unit of a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Visual style for generated model images.
    #[serde(default)]
    pub model_style: ModelStyle,
    /// Background style hint passed to the generation prompt.
    #[serde(default = "default_background_style")]
    pub background_style: String,
    /// Number of shots to generate per pose. Must be at least 1.
    pub shots_per_pose: u32,
    /// Optional base seed. When set, per-unit seeds derive deterministically
    /// from it; when unset, providers supply their own entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Optional negative prompt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

fn default_background_style() -> String {
    "minimal-studio".to_string()
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model_style: ModelStyle::default(),
            background_style: default_background_style(),
            shots_per_pose: 1,
            seed: None,
            negative_prompt: None,
        }
    }
}

impl GenerationSettings {
    /// The negative prompt to send to providers, falling back to the default.
    pub fn effective_negative_prompt(&self) -> &str {
        self.negative_prompt
            .as_deref()
            .unwrap_or(DEFAULT_NEGATIVE_PROMPT)
    }
}

/// Named provider identifiers for the two-stage pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderSelection {
    /// Identifier of the model-image generation provider.
    pub image_generation: String,
    /// Identifier of the virtual try-on provider.
    pub try_on: String,
}
