//! Best-effort session persistence.

use lookbook_core::{GeneratedImage, GenerationSettings, ImageRef, ProviderSelection};
use lookbook_interface::SessionStore;
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

/// Records successful results into the session store.
///
/// Persistence never gates a response: store failures are logged and
/// swallowed, and the images are returned to the caller regardless.
#[derive(Clone)]
pub struct SessionRecorder {
    store: Option<Arc<dyn SessionStore>>,
}

impl SessionRecorder {
    /// Build a recorder over an optional store.
    pub fn new(store: Option<Arc<dyn SessionStore>>) -> Self {
        Self { store }
    }

    /// A recorder that persists nothing.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    /// Create a session and append the images to it.
    ///
    /// Returns the session id when a session was created, even if the
    /// append itself failed. Nothing is persisted for empty image lists.
    #[instrument(skip_all, fields(images = images.len()))]
    pub async fn record(
        &self,
        garment_images: Vec<ImageRef>,
        settings: &GenerationSettings,
        providers: &ProviderSelection,
        lora_model_id: Option<String>,
        images: &[GeneratedImage],
    ) -> Option<Uuid> {
        let store = self.store.as_ref()?;
        if images.is_empty() {
            return None;
        }

        let session = match store
            .create_session(
                garment_images,
                settings.clone(),
                providers.clone(),
                lora_model_id,
            )
            .await
        {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "Failed to create session, returning results unpersisted");
                return None;
            }
        };

        if let Err(err) = store.append_images(session.id, images).await {
            warn!(
                error = %err,
                session_id = %session.id,
                "Failed to append images to session"
            );
        }
        Some(session.id)
    }
}

impl std::fmt::Debug for SessionRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRecorder")
            .field("enabled", &self.store.is_some())
            .finish()
    }
}
