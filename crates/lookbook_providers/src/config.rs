//! Configuration for provider backends.

use derive_getters::Getters;
use std::time::Duration;

/// Configuration shared by the Replicate-backed providers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ProviderConfig {
    /// Base URL of the prediction API.
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// API token. Providers report themselves unavailable when absent.
    #[builder(default)]
    api_token: Option<String>,
    /// Interval between prediction polls.
    #[builder(default = "Duration::from_secs(1)")]
    poll_interval: Duration,
    /// Maximum polls before a prediction is considered timed out.
    #[builder(default = "120")]
    max_polls: usize,
}

fn default_base_url() -> String {
    "https://api.replicate.com/v1".to_string()
}

impl ProviderConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `REPLICATE_API_TOKEN` (optional; providers are unavailable without it)
    /// - `REPLICATE_BASE_URL` (default: the public Replicate API)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("REPLICATE_BASE_URL").unwrap_or_else(|_| default_base_url());
        let api_token = std::env::var("REPLICATE_API_TOKEN").ok();

        ProviderConfigBuilder::default()
            .base_url(base_url)
            .api_token(api_token)
            .build()
            .expect("Valid ProviderConfig")
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfigBuilder::default()
            .build()
            .expect("Valid ProviderConfig")
    }
}
