//! Session and model persistence for the Lookbook generation pipeline.
//!
//! Provides in-memory implementations of the store traits. All data is
//! lost when the store is dropped; the traits leave room for a KV-backed
//! implementation with the same append semantics.

mod lora;
mod session;

pub use lora::InMemoryLoraModelRepository;
pub use session::InMemorySessionStore;
