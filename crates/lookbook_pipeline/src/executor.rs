//! Two-stage unit execution: generate, then composite.

use crate::outcome::UnitOutcome;
use lookbook_core::{GarmentCategory, GeneratedImage, GenerationSettings, GenerationUnit, ImageRef};
use lookbook_error::{GenerationError, GenerationErrorKind};
use lookbook_interface::{
    ImageGenerationCapability, ModelImageOptionsBuilder, TryOnCapability, TryOnOptionsBuilder,
};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Per-request inputs shared by every unit of one garment.
#[derive(Debug, Clone)]
pub struct UnitContext<'a> {
    /// The garment being rendered.
    pub garment_image: &'a ImageRef,
    /// Category steering the compositor.
    pub garment_category: GarmentCategory,
    /// Style reference images forwarded to the generation step.
    pub style_reference_images: &'a [ImageRef],
    /// Settings shared across the request.
    pub settings: &'a GenerationSettings,
}

/// Runs units through the two-stage pipeline.
///
/// Stage one (model-image generation) is required: its failure makes the
/// unit terminal. Stage two (try-on compositing) is best-effort: its
/// failure falls back to the uncomposited model image. Availability is
/// probed once at construction, not once per unit.
pub struct PipelineExecutor {
    image_gen: Arc<dyn ImageGenerationCapability>,
    try_on: Arc<dyn TryOnCapability>,
    try_on_available: bool,
}

impl PipelineExecutor {
    /// Probe both providers and build an executor.
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` when the image-generation provider is
    /// not available; an unavailable try-on provider only disables the
    /// compositing stage.
    #[instrument(skip_all)]
    pub async fn probe(
        image_gen: Arc<dyn ImageGenerationCapability>,
        try_on: Arc<dyn TryOnCapability>,
    ) -> Result<Self, GenerationError> {
        if !image_gen.is_available().await {
            return Err(GenerationError::new(
                GenerationErrorKind::ProviderUnavailable(image_gen.name().to_string()),
            ));
        }
        let try_on_available = try_on.is_available().await;
        if !try_on_available {
            warn!(
                provider = try_on.name(),
                "Try-on provider unavailable, returning model images without compositing"
            );
        }
        Ok(Self {
            image_gen,
            try_on,
            try_on_available,
        })
    }

    /// Run a single unit to completion.
    ///
    /// Never returns an error: stage-one failures become
    /// [`UnitOutcome::Failed`] so sibling units keep running.
    #[instrument(skip(self, ctx), fields(unit = %unit))]
    pub async fn run_unit(&self, unit: &GenerationUnit, ctx: &UnitContext<'_>) -> UnitOutcome {
        let options = ModelImageOptionsBuilder::default()
            .pose(unit.pose)
            .style(ctx.settings.model_style)
            .seed(unit.derived_seed)
            .negative_prompt(Some(ctx.settings.effective_negative_prompt().to_string()))
            .garment_image(ctx.garment_image.clone())
            .garment_category(ctx.garment_category)
            .style_reference_images(ctx.style_reference_images.to_vec())
            .build()
            .expect("all required model-image options are set");

        let model_image = match self.image_gen.generate_model_image(&options).await {
            Ok(image) => image,
            Err(err) => {
                warn!(error = %err, "Model image generation failed");
                return UnitOutcome::Failed {
                    unit: *unit,
                    reason: format!("{} failed: {}", unit, err.kind),
                };
            }
        };

        if !self.try_on_available {
            return UnitOutcome::Succeeded(self.image_record(model_image, unit, ctx, false));
        }

        let try_on_options = TryOnOptionsBuilder::default()
            .garment_image(ctx.garment_image.clone())
            .model_image(model_image.clone())
            .pose(unit.pose)
            .category(ctx.garment_category)
            .seed(unit.derived_seed)
            .build()
            .expect("all required try-on options are set");

        match self.try_on.try_on(&try_on_options).await {
            Ok(composited) => {
                UnitOutcome::Succeeded(self.image_record(composited, unit, ctx, true))
            }
            Err(err) => {
                warn!(error = %err, "Try-on failed, falling back to the model image");
                UnitOutcome::Succeeded(self.image_record(model_image, unit, ctx, false))
            }
        }
    }

    fn image_record(
        &self,
        image: ImageRef,
        unit: &GenerationUnit,
        ctx: &UnitContext<'_>,
        composited: bool,
    ) -> GeneratedImage {
        let provider = if composited {
            format!("{} + {}", self.image_gen.name(), self.try_on.name())
        } else {
            self.image_gen.name().to_string()
        };
        let mut settings = ctx.settings.clone();
        settings.seed = unit.derived_seed;
        GeneratedImage::new(image, unit.pose, settings, provider)
    }
}
