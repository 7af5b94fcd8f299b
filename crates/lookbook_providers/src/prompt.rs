//! Prompt assembly for the model-image generation step.

use lookbook_core::{ModelStyle, Pose};

/// Garment description passed to try-on compositors.
pub const GARMENT_DESCRIPTION: &str =
    "preserve all details: drawstrings, zippers, pockets, seams, exact colors";

const BASE_PROMPT: &str = "young Korean female model, high-quality fashion lookbook, \
     sharp details, professional fashion photography";

/// Build the full generation prompt for a pose and style.
///
/// A caller-supplied custom prompt is prefixed; the pose fragment always
/// comes last so framing instructions stay closest to the sampler.
pub fn build_model_prompt(pose: Pose, style: ModelStyle, custom_prompt: Option<&str>) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if let Some(custom) = custom_prompt
        && !custom.is_empty()
    {
        parts.push(custom);
    }
    parts.push(BASE_PROMPT);
    parts.push(style.prompt_fragment());
    parts.push(pose.prompt_fragment());
    parts.join(", ")
}
