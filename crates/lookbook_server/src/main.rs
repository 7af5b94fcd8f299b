//! Lookbook server binary.

use lookbook_pipeline::{GenerationService, SessionRecorder};
use lookbook_providers::{ProviderConfig, default_registry};
use lookbook_server::{ApiState, ServerConfig, create_router};
use lookbook_storage::{InMemoryLoraModelRepository, InMemorySessionStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();
    let registry = default_registry(&ProviderConfig::from_env());
    info!(?registry, "Providers registered");

    let store = Arc::new(InMemorySessionStore::new());
    let models = Arc::new(InMemoryLoraModelRepository::new());
    let service = GenerationService::new(
        Arc::new(registry),
        models,
        SessionRecorder::new(Some(store.clone())),
    )
    .with_budget(config.deadline_secs().map(Duration::from_secs));

    let router = create_router(ApiState::new(Arc::new(service), store));
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!(addr = %config.addr(), "Lookbook server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
