//! Capability traits for pluggable generation backends.

use async_trait::async_trait;
use lookbook_core::{GarmentCategory, ImageRef, LoraModel, ModelStyle, Pose};
use lookbook_error::ProviderError;

/// Options for one model-image generation call.
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ModelImageOptions {
    /// Pose to generate.
    pub pose: Pose,
    /// Visual style.
    pub style: ModelStyle,
    /// Derived seed for this unit, when the request carries a base seed.
    #[builder(default)]
    pub seed: Option<u64>,
    /// Negative prompt for the generation step.
    #[builder(default)]
    pub negative_prompt: Option<String>,
    /// The garment the generated model should be wearing.
    pub garment_image: ImageRef,
    /// Category of the garment.
    #[builder(default)]
    pub garment_category: GarmentCategory,
    /// Style reference images, at most ten.
    #[builder(default)]
    pub style_reference_images: Vec<ImageRef>,
    /// Caller-supplied prompt prefix.
    #[builder(default)]
    pub custom_prompt: Option<String>,
}

/// Options for one try-on compositing call.
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TryOnOptions {
    /// The garment to composite.
    pub garment_image: ImageRef,
    /// The model image produced by the generation step.
    pub model_image: ImageRef,
    /// Pose of the model image.
    pub pose: Pose,
    /// Garment category steering the compositor.
    #[builder(default)]
    pub category: GarmentCategory,
    /// Optional seed.
    #[builder(default)]
    pub seed: Option<u64>,
}

/// A backend that generates synthetic model images.
#[async_trait]
pub trait ImageGenerationCapability: Send + Sync {
    /// Identifier used in provider labels and logs.
    fn name(&self) -> &str;

    /// Whether this provider's credentials and configuration are present.
    ///
    /// Probed once per request, not once per unit.
    async fn is_available(&self) -> bool;

    /// Generate a model image for the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or its response cannot
    /// be parsed.
    async fn generate_model_image(
        &self,
        options: &ModelImageOptions,
    ) -> Result<ImageRef, ProviderError>;
}

/// A backend that composites a garment onto a model image.
#[async_trait]
pub trait TryOnCapability: Send + Sync {
    /// Identifier used in provider labels and logs.
    fn name(&self) -> &str;

    /// Whether this provider's credentials and configuration are present.
    async fn is_available(&self) -> bool;

    /// Composite the garment onto the model image.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or its response cannot
    /// be parsed.
    async fn try_on(&self, options: &TryOnOptions) -> Result<ImageRef, ProviderError>;
}

/// A backend that generates images through a trained LoRA adapter in a
/// single stage, with no separate compositing step.
#[async_trait]
pub trait LoraCapability: Send + Sync {
    /// Identifier used in provider labels and logs.
    fn name(&self) -> &str;

    /// Whether this provider's credentials and configuration are present.
    async fn is_available(&self) -> bool;

    /// Generate an image with the trained model.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or its response cannot
    /// be parsed.
    async fn generate_with_lora(
        &self,
        model: &LoraModel,
        prompt: &str,
        pose: Pose,
        garment_image: Option<&ImageRef>,
        seed: Option<u64>,
    ) -> Result<ImageRef, ProviderError>;
}
