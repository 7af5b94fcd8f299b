//! Shared mock providers and stores for pipeline tests.
#![allow(dead_code)]

use async_trait::async_trait;
use lookbook_core::{
    GeneratedImage, GenerationSession, GenerationSettings, HistoryItem, ImageRef, LoraModel,
    LoraStatus, Pose, ProviderSelection,
};
use lookbook_error::{ProviderError, ProviderErrorKind, StorageError, StorageErrorKind};
use lookbook_interface::{
    ImageGenerationCapability, LoraCapability, ModelImageOptions, SessionStore, TryOnCapability,
    TryOnOptions,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

/// Image-generation mock recording every call it receives.
pub struct MockImageGen {
    pub name: &'static str,
    pub available: bool,
    /// Garment payload substring that makes generation fail.
    pub fail_marker: Option<&'static str>,
    /// Poses that always fail.
    pub fail_poses: Vec<Pose>,
    /// Simulated per-call latency.
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<ModelImageOptions>>,
}

impl MockImageGen {
    pub fn available(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            fail_marker: None,
            fail_poses: Vec::new(),
            delay: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn slow(name: &'static str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::available(name)
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::available(name)
        }
    }

    pub fn failing_for_garment(name: &'static str, marker: &'static str) -> Self {
        Self {
            fail_marker: Some(marker),
            ..Self::available(name)
        }
    }

    pub fn failing_for_poses(name: &'static str, poses: Vec<Pose>) -> Self {
        Self {
            fail_poses: poses,
            ..Self::available(name)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_seeds(&self) -> Vec<Option<u64>> {
        self.seen.lock().unwrap().iter().map(|o| o.seed).collect()
    }
}

#[async_trait]
impl ImageGenerationCapability for MockImageGen {
    fn name(&self) -> &str {
        self.name
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate_model_image(
        &self,
        options: &ModelImageOptions,
    ) -> Result<ImageRef, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(options.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(marker) = self.fail_marker
            && options.garment_image.as_str().contains(marker)
        {
            return Err(ProviderError::new(ProviderErrorKind::PredictionFailed(
                "synthetic generation failure".to_string(),
            )));
        }
        if self.fail_poses.contains(&options.pose) {
            return Err(ProviderError::new(ProviderErrorKind::PredictionFailed(
                "synthetic generation failure".to_string(),
            )));
        }
        Ok(ImageRef::Url(format!(
            "https://mock.delivery/model-{}-{}.png",
            options.pose,
            self.calls.load(Ordering::SeqCst)
        )))
    }
}

/// Try-on mock, optionally failing every call.
pub struct MockTryOn {
    pub name: &'static str,
    pub available: bool,
    pub fail_always: bool,
    pub calls: AtomicUsize,
}

impl MockTryOn {
    pub fn available(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            fail_always: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::available(name)
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_always: true,
            ..Self::available(name)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TryOnCapability for MockTryOn {
    fn name(&self) -> &str {
        self.name
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn try_on(&self, options: &TryOnOptions) -> Result<ImageRef, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_always {
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: 502,
                message: "synthetic try-on failure".to_string(),
            }));
        }
        Ok(ImageRef::Url(format!(
            "https://mock.delivery/tryon-{}.png",
            options.pose
        )))
    }
}

/// LoRA backend mock recording the prompts it receives.
pub struct MockLora {
    pub name: &'static str,
    pub available: bool,
    pub fail_always: bool,
    pub calls: AtomicUsize,
    pub seen_prompts: Mutex<Vec<String>>,
}

impl MockLora {
    pub fn available(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            fail_always: false,
            calls: AtomicUsize::new(0),
            seen_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::available(name)
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_always: true,
            ..Self::available(name)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoraCapability for MockLora {
    fn name(&self) -> &str {
        self.name
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate_with_lora(
        &self,
        _model: &LoraModel,
        prompt: &str,
        pose: Pose,
        _garment_image: Option<&ImageRef>,
        _seed: Option<u64>,
    ) -> Result<ImageRef, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_prompts.lock().unwrap().push(prompt.to_string());
        if self.fail_always {
            return Err(ProviderError::new(ProviderErrorKind::PredictionFailed(
                "synthetic lora failure".to_string(),
            )));
        }
        Ok(ImageRef::Url(format!(
            "https://mock.delivery/lora-{pose}.png"
        )))
    }
}

/// Session store whose every operation fails.
pub struct FailingSessionStore;

fn unavailable() -> StorageError {
    StorageError::new(StorageErrorKind::Unavailable(
        "synthetic store outage".to_string(),
    ))
}

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn create_session(
        &self,
        _garment_images: Vec<ImageRef>,
        _settings: GenerationSettings,
        _providers: ProviderSelection,
        _lora_model_id: Option<String>,
    ) -> Result<GenerationSession, StorageError> {
        Err(unavailable())
    }

    async fn append_images(
        &self,
        _session_id: Uuid,
        _images: &[GeneratedImage],
    ) -> Result<GenerationSession, StorageError> {
        Err(unavailable())
    }

    async fn get_session(&self, _session_id: Uuid) -> Result<GenerationSession, StorageError> {
        Err(unavailable())
    }

    async fn list_sessions(&self, _limit: usize) -> Result<Vec<GenerationSession>, StorageError> {
        Err(unavailable())
    }

    async fn list_history(&self, _limit: usize) -> Result<Vec<HistoryItem>, StorageError> {
        Err(unavailable())
    }

    async fn delete_session(&self, _session_id: Uuid) -> Result<(), StorageError> {
        Err(unavailable())
    }
}

/// A trained model record in the given lifecycle state.
pub fn lora_model(id: &str, status: LoraStatus) -> LoraModel {
    LoraModel {
        id: id.to_string(),
        name: format!("{id} style"),
        description: None,
        status,
        version_id: matches!(status, LoraStatus::Completed)
            .then(|| "version-abc123".to_string()),
        trigger_word: "LBSTYLE".to_string(),
        created_at: chrono::Utc::now(),
        completed_at: None,
        error: None,
    }
}
