//! Error types for the Lookbook generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Lookbook ecosystem. Each error carries a kind enum plus the source
//! location where it was created.

mod generation;
mod provider;
mod storage;

pub use generation::{GenerationError, GenerationErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
