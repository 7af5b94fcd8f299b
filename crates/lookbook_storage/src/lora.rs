//! In-memory repository for trained LoRA model records.

use async_trait::async_trait;
use lookbook_core::LoraModel;
use lookbook_error::StorageError;
use lookbook_interface::LoraModelRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory LoRA model repository, keyed by model id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoraModelRepository {
    models: Arc<RwLock<HashMap<String, LoraModel>>>,
}

impl InMemoryLoraModelRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoraModelRepository for InMemoryLoraModelRepository {
    async fn insert(&self, model: LoraModel) -> Result<(), StorageError> {
        self.models.write().await.insert(model.id.clone(), model);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<LoraModel>, StorageError> {
        Ok(self.models.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<LoraModel>, StorageError> {
        let models = self.models.read().await;
        let mut all: Vec<LoraModel> = models.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
