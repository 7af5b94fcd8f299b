//! Virtual try-on providers backed by Replicate.

use crate::config::ProviderConfig;
use crate::prompt::GARMENT_DESCRIPTION;
use crate::replicate::client::ReplicateClient;
use async_trait::async_trait;
use lookbook_core::ImageRef;
use lookbook_error::{ProviderError, ProviderErrorKind};
use lookbook_interface::{TryOnCapability, TryOnOptions};
use tracing::{debug, instrument};

const IDM_VTON_VERSION: &str = "0513734a452173b8173e907e3a59d19a36266e55b48528559432bd21c7d7e985";
const KOLORS_VERSION: &str = "4e3cbc6c096a70ee93dbd91a258ebf8ba3c5e772e22e0c7e49de27a04f633289";

fn missing_token() -> ProviderError {
    ProviderError::new(ProviderErrorKind::MissingCredentials(
        "REPLICATE_API_TOKEN".into(),
    ))
}

/// IDM-VTON compositing provider.
#[derive(Debug, Clone)]
pub struct IdmVtonProvider {
    client: Option<ReplicateClient>,
}

impl IdmVtonProvider {
    /// Creates the provider; it is unavailable without an API token.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: ReplicateClient::from_config(config),
        }
    }
}

#[async_trait]
impl TryOnCapability for IdmVtonProvider {
    fn name(&self) -> &str {
        "idm-vton"
    }

    async fn is_available(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, options), fields(pose = %options.pose, category = %options.category))]
    async fn try_on(&self, options: &TryOnOptions) -> Result<ImageRef, ProviderError> {
        let client = self.client.as_ref().ok_or_else(missing_token)?;
        debug!("Compositing garment");

        let input = serde_json::json!({
            "crop": false,
            "seed": options.seed.unwrap_or(42),
            "steps": 40,
            "category": options.category.to_string(),
            "force_dc": false,
            "garm_img": options.garment_image.as_str(),
            "human_img": options.model_image.as_str(),
            "mask_only": false,
            "garment_des": GARMENT_DESCRIPTION,
        });

        let url = client.run(IDM_VTON_VERSION, input).await?;
        Ok(ImageRef::Url(url))
    }
}

/// Kolors virtual try-on provider.
#[derive(Debug, Clone)]
pub struct KolorsVtonProvider {
    client: Option<ReplicateClient>,
}

impl KolorsVtonProvider {
    /// Creates the provider; it is unavailable without an API token.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: ReplicateClient::from_config(config),
        }
    }
}

#[async_trait]
impl TryOnCapability for KolorsVtonProvider {
    fn name(&self) -> &str {
        "kolors-virtual-tryon"
    }

    async fn is_available(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, options), fields(pose = %options.pose))]
    async fn try_on(&self, options: &TryOnOptions) -> Result<ImageRef, ProviderError> {
        let client = self.client.as_ref().ok_or_else(missing_token)?;
        debug!("Compositing garment");

        // Kolors does not take a category; the model infers placement.
        let input = serde_json::json!({
            "seed": options.seed.unwrap_or(42),
            "steps": 30,
            "person_image": options.model_image.as_str(),
            "garment_image": options.garment_image.as_str(),
        });

        let url = client.run(KOLORS_VERSION, input).await?;
        Ok(ImageRef::Url(url))
    }
}
