//! Photographic pose categories and garment categories.

use serde::{Deserialize, Serialize};

/// A named photographic pose category.
///
/// Each pose carries a prompt fragment describing the framing and stance
/// for the model-image generation step.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Pose {
    /// Standing facing the camera.
    Front,
    /// Side profile, candid walking moment.
    Side,
    /// Back view, showing outfit back details.
    Back,
    /// Lifestyle pose with natural editorial feel.
    Styled,
    /// 3/4 shot focusing on outfit details.
    Detail,
}

impl Pose {
    /// Prompt fragment describing this pose for the generation step.
    pub fn prompt_fragment(&self) -> &'static str {
        match self {
            Pose::Front => {
                "wide full body shot from head to feet, standing casually facing camera, \
                 weight on one leg, relaxed natural stance, generous framing with space \
                 around model, full head and body visible in frame"
            }
            Pose::Side => {
                "wide full body shot from head to feet, side profile angle, looking away \
                 naturally, candid walking moment, generous framing with environment \
                 visible, entire body in frame"
            }
            Pose::Back => {
                "wide full body shot from head to feet, back view, slightly looking over \
                 shoulder, showing outfit back details, shot from distance with full body \
                 visible"
            }
            Pose::Styled => {
                "wide shot lifestyle pose from head to feet, sitting on chair or adjusting \
                 clothes or hand in pocket or touching hair, full body with surroundings \
                 visible, natural relaxed editorial feel"
            }
            Pose::Detail => {
                "3/4 body shot with comfortable framing, focusing on outfit details, \
                 fabric texture, accessories, upper body and face visible"
            }
        }
    }
}

/// Garment category consumed by the try-on compositing step.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GarmentCategory {
    /// Tops, shirts, outerwear.
    UpperBody,
    /// Pants, skirts.
    LowerBody,
    /// One-piece garments. Default when the caller does not classify.
    #[default]
    Dresses,
}
