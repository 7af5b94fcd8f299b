//! Generation orchestration core for Lookbook.
//!
//! Turns a request (garments × poses × shots × provider choice) into a set
//! of output images by chaining two external calls per image (synthetic
//! model-image generation, then garment compositing), with per-unit
//! failure isolation, deterministic seeding, an alternate single-stage
//! LoRA path, and best-effort append-only session persistence.

mod aggregate;
mod deadline;
mod executor;
mod expand;
mod lora;
mod outcome;
mod recorder;
mod seed;
mod service;

pub use aggregate::{GarmentOutput, aggregate};
pub use deadline::DeadlineBudget;
pub use executor::{PipelineExecutor, UnitContext};
pub use expand::expand_units;
pub use lora::{DEFAULT_LORA_PROMPT, LoraExecutor};
pub use outcome::UnitOutcome;
pub use recorder::SessionRecorder;
pub use seed::{
    GARMENT_SEED_STRIDE, MAX_BATCH_GARMENTS, MAX_SEED_SPAN, MAX_SHOTS_PER_POSE, SeedAllocator,
};
pub use service::{BatchOutput, GenerationOutput, GenerationService};
