//! AI backend integrations for the Lookbook generation pipeline.
//!
//! All bundled providers speak the Replicate prediction API: create a
//! prediction, poll until it reaches a terminal state, extract the output
//! image URL. Each provider reports availability from the presence of the
//! API token, probed once per request by the pipeline.

mod config;
mod prompt;
mod registry;
mod replicate;
mod retry;

pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use prompt::{GARMENT_DESCRIPTION, build_model_prompt};
pub use registry::default_registry;
pub use replicate::{
    FluxImageProvider, IdmVtonProvider, KolorsVtonProvider, Prediction, PredictionStatus,
    ReplicateClient, ReplicateLoraProvider, StableDiffusionProvider,
};
pub use retry::{RetryConfig, with_retry};
