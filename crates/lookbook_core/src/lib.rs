//! Core data types for the Lookbook generation pipeline.
//!
//! This crate provides the foundation data types used across all Lookbook
//! interfaces: poses, settings, generation units, generated images,
//! sessions, and LoRA model records.

mod batch;
mod image;
mod lora;
mod media;
mod pose;
mod request;
mod session;
mod settings;
mod unit;

pub use batch::{BatchResult, BatchSummary};
pub use image::GeneratedImage;
pub use lora::{LoraModel, LoraStatus};
pub use media::ImageRef;
pub use pose::{GarmentCategory, Pose};
pub use request::{BatchRequest, GenerationRequest, LoraGenerationRequest};
pub use session::{GenerationSession, HistoryItem, SessionStatus};
pub use settings::{
    DEFAULT_NEGATIVE_PROMPT, GenerationSettings, ModelStyle, ProviderSelection,
};
pub use unit::GenerationUnit;
