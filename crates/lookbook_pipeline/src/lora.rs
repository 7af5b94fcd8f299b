//! Single-stage LoRA execution path.

use crate::outcome::UnitOutcome;
use lookbook_core::{GeneratedImage, GenerationSettings, GenerationUnit, ImageRef, LoraModel};
use lookbook_error::{GenerationError, GenerationErrorKind};
use lookbook_interface::{LoraCapability, LoraModelRepository};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Prompt used when the caller supplies none for the LoRA path.
pub const DEFAULT_LORA_PROMPT: &str = "Korean online shopping mall style fashion photo, \
     young Korean female model, face cropped above lips, natural iPhone photography, \
     casual everyday background";

/// Runs units through a trained style adapter in a single stage.
///
/// There is no compositing step and no fallback: the adapter either
/// produces the image or the unit fails.
pub struct LoraExecutor {
    capability: Arc<dyn LoraCapability>,
    models: Arc<dyn LoraModelRepository>,
}

impl LoraExecutor {
    /// Build an executor over a LoRA backend and model repository.
    pub fn new(capability: Arc<dyn LoraCapability>, models: Arc<dyn LoraModelRepository>) -> Self {
        Self { capability, models }
    }

    /// Look up a model and check it is ready to generate.
    ///
    /// Called before any generation work is scheduled, so a not-ready model
    /// rejects the whole request with zero provider calls.
    ///
    /// # Errors
    ///
    /// Returns `ModelNotReady` when the model is missing or its training
    /// has not completed, and `GenerationFailed` when the repository lookup
    /// itself fails.
    #[instrument(skip(self))]
    pub async fn resolve_model(&self, id: &str) -> Result<LoraModel, GenerationError> {
        let model = self.models.get(id).await.map_err(|err| {
            GenerationError::new(GenerationErrorKind::GenerationFailed(format!(
                "model lookup failed: {}",
                err.kind
            )))
        })?;
        match model {
            Some(model) if model.is_ready() => Ok(model),
            Some(model) => Err(GenerationError::new(GenerationErrorKind::ModelNotReady {
                id: id.to_string(),
                status: model.status.to_string(),
            })),
            None => Err(GenerationError::new(GenerationErrorKind::ModelNotReady {
                id: id.to_string(),
                status: "missing".to_string(),
            })),
        }
    }

    /// Check the backend reports itself available.
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` when credentials or configuration are
    /// missing.
    pub async fn probe(&self) -> Result<(), GenerationError> {
        if !self.capability.is_available().await {
            return Err(GenerationError::new(
                GenerationErrorKind::ProviderUnavailable(self.capability.name().to_string()),
            ));
        }
        Ok(())
    }

    /// Run a single unit through the trained model.
    #[instrument(skip(self, model, prompt, garment_image, settings), fields(unit = %unit, model = %model.id))]
    pub async fn run_unit(
        &self,
        model: &LoraModel,
        prompt: &str,
        unit: &GenerationUnit,
        garment_image: Option<&ImageRef>,
        settings: &GenerationSettings,
    ) -> UnitOutcome {
        match self
            .capability
            .generate_with_lora(model, prompt, unit.pose, garment_image, unit.derived_seed)
            .await
        {
            Ok(image) => {
                let mut settings = settings.clone();
                settings.seed = unit.derived_seed;
                UnitOutcome::Succeeded(GeneratedImage::new(
                    image,
                    unit.pose,
                    settings,
                    format!("LoRA: {}", model.name),
                ))
            }
            Err(err) => {
                warn!(error = %err, "LoRA generation failed");
                UnitOutcome::Failed {
                    unit: *unit,
                    reason: format!("{} failed: {}", unit, err.kind),
                }
            }
        }
    }
}
