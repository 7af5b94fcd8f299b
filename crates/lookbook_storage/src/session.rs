//! In-memory implementation of the session store.

use async_trait::async_trait;
use chrono::Utc;
use lookbook_core::{
    GeneratedImage, GenerationSession, GenerationSettings, HistoryItem, ImageRef,
    ProviderSelection,
};
use lookbook_error::{StorageError, StorageErrorKind};
use lookbook_interface::SessionStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory session store.
///
/// Sessions, their history projections, and a newest-first id list live in
/// HashMaps protected by a single RwLock, so `append_images` is an atomic
/// list-push: concurrent appenders serialize on the write lock and no
/// update is lost to read-modify-write races.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    sessions: HashMap<Uuid, GenerationSession>,
    history: HashMap<Uuid, HistoryItem>,
    /// Session ids, newest first.
    order: Vec<Uuid>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions (for testing).
    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    /// Whether the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.sessions.is_empty()
    }

    /// Remove all sessions and history (for testing).
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.sessions.clear();
        inner.history.clear();
        inner.order.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(
        &self,
        garment_images: Vec<ImageRef>,
        settings: GenerationSettings,
        providers: ProviderSelection,
        lora_model_id: Option<String>,
    ) -> Result<GenerationSession, StorageError> {
        let session =
            GenerationSession::new(garment_images, settings, providers, lora_model_id);

        let mut inner = self.inner.write().await;
        inner.order.insert(0, session.id);
        inner.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn append_images(
        &self,
        session_id: Uuid,
        images: &[GeneratedImage],
    ) -> Result<GenerationSession, StorageError> {
        let mut inner = self.inner.write().await;
        let session = inner.sessions.get_mut(&session_id).ok_or_else(|| {
            StorageError::new(StorageErrorKind::NotFound(session_id.to_string()))
        })?;

        session.generated_images.extend_from_slice(images);
        session.updated_at = Utc::now();

        let updated = session.clone();
        inner.history.insert(session_id, updated.history_item());
        Ok(updated)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<GenerationSession, StorageError> {
        self.inner
            .read()
            .await
            .sessions
            .get(&session_id)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(session_id.to_string())))
    }

    async fn list_sessions(&self, limit: usize) -> Result<Vec<GenerationSession>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .take(limit)
            .filter_map(|id| inner.sessions.get(id).cloned())
            .collect())
    }

    async fn list_history(&self, limit: usize) -> Result<Vec<HistoryItem>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .take(limit)
            .filter_map(|id| inner.history.get(id).cloned())
            .collect())
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        if inner.sessions.remove(&session_id).is_none() {
            return Err(StorageError::new(StorageErrorKind::NotFound(
                session_id.to_string(),
            )));
        }
        inner.history.remove(&session_id);
        inner.order.retain(|id| *id != session_id);
        Ok(())
    }
}
