//! Trait definitions for the Lookbook generation pipeline.
//!
//! Capabilities are the seams between the orchestration core and the
//! pluggable AI backends; the store traits are the seams to persistence.

mod capability;
mod registry;
mod store;

pub use capability::{
    ImageGenerationCapability, LoraCapability, ModelImageOptions, ModelImageOptionsBuilder,
    TryOnCapability, TryOnOptions, TryOnOptionsBuilder,
};
pub use registry::{ProviderRegistry, ProviderRegistryBuilder};
pub use store::{LoraModelRepository, SessionStore};
