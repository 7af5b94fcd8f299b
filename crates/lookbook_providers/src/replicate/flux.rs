//! Model-image generation providers backed by SDXL on Replicate.

use crate::config::ProviderConfig;
use crate::prompt::build_model_prompt;
use crate::replicate::client::ReplicateClient;
use async_trait::async_trait;
use lookbook_core::ImageRef;
use lookbook_error::{ProviderError, ProviderErrorKind};
use lookbook_interface::{ImageGenerationCapability, ModelImageOptions};
use tracing::{debug, instrument};

const SDXL_VERSION: &str = "39ed52f2a78e934b3ba6e2a89f5b1c712de7dfea535525255b1aa35c5565e08b";

fn sdxl_input(options: &ModelImageOptions) -> serde_json::Value {
    let prompt = build_model_prompt(
        options.pose,
        options.style,
        options.custom_prompt.as_deref(),
    );
    serde_json::json!({
        "prompt": prompt,
        "negative_prompt": options.negative_prompt,
        "width": 768,
        "height": 1024,
        "num_outputs": 1,
        "scheduler": "K_EULER",
        "num_inference_steps": 30,
        "guidance_scale": 7.5,
        "seed": options.seed,
    })
}

fn missing_token() -> ProviderError {
    ProviderError::new(ProviderErrorKind::MissingCredentials(
        "REPLICATE_API_TOKEN".into(),
    ))
}

/// Flux-branded SDXL generation provider.
#[derive(Debug, Clone)]
pub struct FluxImageProvider {
    client: Option<ReplicateClient>,
}

impl FluxImageProvider {
    /// Creates the provider; it is unavailable without an API token.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: ReplicateClient::from_config(config),
        }
    }
}

#[async_trait]
impl ImageGenerationCapability for FluxImageProvider {
    fn name(&self) -> &str {
        "replicate-flux"
    }

    async fn is_available(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, options), fields(pose = %options.pose, seed = ?options.seed))]
    async fn generate_model_image(
        &self,
        options: &ModelImageOptions,
    ) -> Result<ImageRef, ProviderError> {
        let client = self.client.as_ref().ok_or_else(missing_token)?;
        debug!("Generating model image");
        let url = client.run(SDXL_VERSION, sdxl_input(options)).await?;
        Ok(ImageRef::Url(url))
    }
}

/// Plain SDXL generation provider.
#[derive(Debug, Clone)]
pub struct StableDiffusionProvider {
    client: Option<ReplicateClient>,
}

impl StableDiffusionProvider {
    /// Creates the provider; it is unavailable without an API token.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: ReplicateClient::from_config(config),
        }
    }
}

#[async_trait]
impl ImageGenerationCapability for StableDiffusionProvider {
    fn name(&self) -> &str {
        "stability-ai"
    }

    async fn is_available(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, options), fields(pose = %options.pose, seed = ?options.seed))]
    async fn generate_model_image(
        &self,
        options: &ModelImageOptions,
    ) -> Result<ImageRef, ProviderError> {
        let client = self.client.as_ref().ok_or_else(missing_token)?;
        debug!("Generating model image");
        let url = client.run(SDXL_VERSION, sdxl_input(options)).await?;
        Ok(ImageRef::Url(url))
    }
}
