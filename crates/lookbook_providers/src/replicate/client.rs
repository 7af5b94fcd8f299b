//! Shared client for the Replicate prediction API.

use crate::config::ProviderConfig;
use crate::replicate::dto::{Prediction, PredictionRequest};
use crate::retry::{RetryConfig, with_retry};
use lookbook_error::{ProviderError, ProviderErrorKind};
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, error, instrument};

/// Client for running versioned models through the prediction API.
///
/// Create a prediction, poll until it reaches a terminal status, extract
/// the output URL. Creation is retried on transient failures; polling is
/// not (a lost poll is recovered by the next one).
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: Client,
    config: ProviderConfig,
    retry: RetryConfig,
}

impl ReplicateClient {
    /// Creates a client, or `None` when no API token is configured.
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        config.api_token().as_ref()?;
        Some(Self {
            client: Client::new(),
            config: config.clone(),
            retry: RetryConfig::default(),
        })
    }

    fn token(&self) -> &str {
        // from_config guarantees presence
        self.config.api_token().as_deref().unwrap_or_default()
    }

    /// Run a model version to completion and return the output URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the prediction cannot be created, fails or is
    /// canceled on the backend, times out, or produces unparseable output.
    #[instrument(skip(self, input), fields(version = %version))]
    pub async fn run(
        &self,
        version: &str,
        input: serde_json::Value,
    ) -> Result<String, ProviderError> {
        let prediction = with_retry(&self.retry, || {
            self.create_prediction(version, input.clone())
        })
        .await?;

        debug!(prediction_id = %prediction.id(), "Prediction created");
        let finished = self.wait_for_prediction(prediction).await?;
        finished.output_url()
    }

    async fn create_prediction(
        &self,
        version: &str,
        input: serde_json::Value,
    ) -> Result<Prediction, ProviderError> {
        let body = PredictionRequest { version, input };
        let response = self
            .client
            .post(format!("{}/predictions", self.config.base_url()))
            .bearer_auth(self.token())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Http(format!("request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Prediction creation rejected");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        response.json::<Prediction>().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "failed to parse prediction: {e}"
            )))
        })
    }

    async fn get_prediction(&self, id: &str) -> Result<Prediction, ProviderError> {
        let response = self
            .client
            .get(format!("{}/predictions/{id}", self.config.base_url()))
            .bearer_auth(self.token())
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Http(format!("poll failed: {e}"))))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        response.json::<Prediction>().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "failed to parse prediction: {e}"
            )))
        })
    }

    async fn wait_for_prediction(
        &self,
        mut prediction: Prediction,
    ) -> Result<Prediction, ProviderError> {
        let mut polls = 0;
        while !prediction.status().is_terminal() {
            if polls >= *self.config.max_polls() {
                return Err(ProviderError::new(ProviderErrorKind::PredictionTimeout(
                    polls,
                )));
            }
            sleep(*self.config.poll_interval()).await;
            prediction = self.get_prediction(prediction.id()).await?;
            polls += 1;
        }

        match prediction.status() {
            crate::replicate::dto::PredictionStatus::Succeeded => Ok(prediction),
            _ => {
                let message = prediction
                    .error()
                    .clone()
                    .unwrap_or_else(|| format!("terminal status {:?}", prediction.status()));
                error!(prediction_id = %prediction.id(), error = %message, "Prediction failed");
                Err(ProviderError::new(ProviderErrorKind::PredictionFailed(
                    message,
                )))
            }
        }
    }
}
