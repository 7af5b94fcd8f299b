//! Default provider registrations.

use crate::config::ProviderConfig;
use crate::replicate::{
    FluxImageProvider, IdmVtonProvider, KolorsVtonProvider, ReplicateLoraProvider,
    StableDiffusionProvider,
};
use lookbook_interface::ProviderRegistry;
use std::sync::Arc;

/// Build the registry with every bundled provider registered.
///
/// Registration does not imply availability: providers without credentials
/// register anyway and report `is_available() == false`, so the pipeline's
/// per-request probe decides.
pub fn default_registry(config: &ProviderConfig) -> ProviderRegistry {
    ProviderRegistry::builder()
        .image_generation("replicate-flux", Arc::new(FluxImageProvider::new(config)))
        .image_generation(
            "stability-ai",
            Arc::new(StableDiffusionProvider::new(config)),
        )
        .try_on("idm-vton", Arc::new(IdmVtonProvider::new(config)))
        .try_on(
            "kolors-virtual-tryon",
            Arc::new(KolorsVtonProvider::new(config)),
        )
        .lora(Arc::new(ReplicateLoraProvider::new(config)))
        .build()
}
