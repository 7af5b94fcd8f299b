//! Single-stage generation through trained LoRA adapters on Replicate.

use crate::config::ProviderConfig;
use crate::replicate::client::ReplicateClient;
use async_trait::async_trait;
use lookbook_core::{DEFAULT_NEGATIVE_PROMPT, ImageRef, LoraModel, Pose};
use lookbook_error::{ProviderError, ProviderErrorKind};
use lookbook_interface::LoraCapability;
use tracing::{debug, instrument};

/// Runs a trained adapter version directly; the adapter already encodes
/// garment and style jointly, so there is no compositing step.
#[derive(Debug, Clone)]
pub struct ReplicateLoraProvider {
    client: Option<ReplicateClient>,
}

impl ReplicateLoraProvider {
    /// Creates the provider; it is unavailable without an API token.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: ReplicateClient::from_config(config),
        }
    }
}

#[async_trait]
impl LoraCapability for ReplicateLoraProvider {
    fn name(&self) -> &str {
        "replicate-lora"
    }

    async fn is_available(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, model, prompt, garment_image), fields(model_id = %model.id, pose = %pose))]
    async fn generate_with_lora(
        &self,
        model: &LoraModel,
        prompt: &str,
        pose: Pose,
        garment_image: Option<&ImageRef>,
        seed: Option<u64>,
    ) -> Result<ImageRef, ProviderError> {
        let client = self.client.as_ref().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::MissingCredentials(
                "REPLICATE_API_TOKEN".into(),
            ))
        })?;
        let version = model.version_id.as_deref().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::PredictionFailed(format!(
                "model {} has no trained version",
                model.id
            )))
        })?;

        // The trigger word binds the prompt to the trained style.
        let full_prompt = format!(
            "{}, {}, {}",
            model.trigger_word,
            prompt,
            pose.prompt_fragment()
        );

        let mut input = serde_json::json!({
            "prompt": full_prompt,
            "negative_prompt": DEFAULT_NEGATIVE_PROMPT,
            "num_outputs": 1,
            "guidance_scale": 7.5,
            "num_inference_steps": 28,
            "seed": seed,
            "output_format": "png",
        });
        if let Some(garment) = garment_image {
            input["image"] = serde_json::Value::String(garment.as_str().to_string());
        }

        debug!("Generating with trained adapter");
        let url = client.run(version, input).await?;
        Ok(ImageRef::Url(url))
    }
}
