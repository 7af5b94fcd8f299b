//! Provider registry keyed by identifier.
//!
//! The registry replaces named-singleton lookup: it is constructed once per
//! process from explicit registrations and is read-only afterwards, so the
//! set of available providers has an explicit lifetime instead of living in
//! hidden global state.

use crate::{ImageGenerationCapability, LoraCapability, TryOnCapability};
use lookbook_error::{GenerationError, GenerationErrorKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only map from provider identifier to capability handle.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    image_generation: HashMap<String, Arc<dyn ImageGenerationCapability>>,
    try_on: HashMap<String, Arc<dyn TryOnCapability>>,
    lora: Option<Arc<dyn LoraCapability>>,
}

impl ProviderRegistry {
    /// Start building a registry.
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Resolve an image-generation provider by identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProvider` when the identifier is not registered.
    pub fn image_generation(
        &self,
        id: &str,
    ) -> Result<Arc<dyn ImageGenerationCapability>, GenerationError> {
        self.image_generation
            .get(id)
            .cloned()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::UnknownProvider(id.into())))
    }

    /// Resolve a try-on provider by identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProvider` when the identifier is not registered.
    pub fn try_on(&self, id: &str) -> Result<Arc<dyn TryOnCapability>, GenerationError> {
        self.try_on
            .get(id)
            .cloned()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::UnknownProvider(id.into())))
    }

    /// The LoRA capability for the single-stage path.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProvider` when no LoRA backend is registered.
    pub fn lora(&self) -> Result<Arc<dyn LoraCapability>, GenerationError> {
        self.lora
            .clone()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::UnknownProvider("lora".into())))
    }

    /// Registered image-generation identifiers, sorted.
    pub fn image_generation_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.image_generation.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Registered try-on identifiers, sorted.
    pub fn try_on_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.try_on.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("image_generation", &self.image_generation_ids())
            .field("try_on", &self.try_on_ids())
            .field("lora", &self.lora.as_ref().map(|l| l.name().to_string()))
            .finish()
    }
}

/// Builder collecting provider registrations.
#[derive(Clone, Default)]
pub struct ProviderRegistryBuilder {
    registry: ProviderRegistry,
}

impl ProviderRegistryBuilder {
    /// Register an image-generation provider under the given identifier.
    pub fn image_generation(
        mut self,
        id: impl Into<String>,
        provider: Arc<dyn ImageGenerationCapability>,
    ) -> Self {
        self.registry.image_generation.insert(id.into(), provider);
        self
    }

    /// Register a try-on provider under the given identifier.
    pub fn try_on(mut self, id: impl Into<String>, provider: Arc<dyn TryOnCapability>) -> Self {
        self.registry.try_on.insert(id.into(), provider);
        self
    }

    /// Register the LoRA backend for the single-stage path.
    pub fn lora(mut self, provider: Arc<dyn LoraCapability>) -> Self {
        self.registry.lora = Some(provider);
        self
    }

    /// Finish building.
    pub fn build(self) -> ProviderRegistry {
        self.registry
    }
}
