//! Persistence traits consumed by the pipeline.

use async_trait::async_trait;
use lookbook_core::{
    GeneratedImage, GenerationSession, GenerationSettings, HistoryItem, ImageRef, LoraModel,
    ProviderSelection,
};
use lookbook_error::StorageError;
use uuid::Uuid;

/// Append-only session persistence.
///
/// Implementations must make `append_images` atomic with respect to
/// concurrent appenders (a single list-push primitive, not
/// read-modify-write across calls), so overlapping requests never lose
/// updates. Append is additive: the store does not deduplicate, relying on
/// each image's unique id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a new session and register it in the session index.
    async fn create_session(
        &self,
        garment_images: Vec<ImageRef>,
        settings: GenerationSettings,
        providers: ProviderSelection,
        lora_model_id: Option<String>,
    ) -> Result<GenerationSession, StorageError>;

    /// Append images to an existing session and refresh its history
    /// projection. Returns the updated session.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the session does not exist.
    async fn append_images(
        &self,
        session_id: Uuid,
        images: &[GeneratedImage],
    ) -> Result<GenerationSession, StorageError>;

    /// Fetch one session.
    async fn get_session(&self, session_id: Uuid) -> Result<GenerationSession, StorageError>;

    /// Most recent sessions, newest first.
    async fn list_sessions(&self, limit: usize) -> Result<Vec<GenerationSession>, StorageError>;

    /// Most recent history items, newest first.
    async fn list_history(&self, limit: usize) -> Result<Vec<HistoryItem>, StorageError>;

    /// Delete a session, cascading to its history item and index entries.
    async fn delete_session(&self, session_id: Uuid) -> Result<(), StorageError>;
}

/// Read access to trained LoRA model records.
#[async_trait]
pub trait LoraModelRepository: Send + Sync {
    /// Insert or replace a model record.
    async fn insert(&self, model: LoraModel) -> Result<(), StorageError>;

    /// Fetch a model by id, or `None` when unknown.
    async fn get(&self, id: &str) -> Result<Option<LoraModel>, StorageError>;

    /// All known models.
    async fn list(&self) -> Result<Vec<LoraModel>, StorageError>;
}
