//! Replicate prediction API integration.

mod client;
mod dto;
mod flux;
mod lora;
mod vton;

pub use client::ReplicateClient;
pub use dto::{Prediction, PredictionStatus};
pub use flux::{FluxImageProvider, StableDiffusionProvider};
pub use lora::ReplicateLoraProvider;
pub use vton::{IdmVtonProvider, KolorsVtonProvider};
