//! HTTP API for the generation pipeline.

use crate::request::HistoryQuery;
use crate::response::{
    BatchResponse, ErrorResponse, GenerateResponse, HistoryResponse, LoraGenerateResponse,
    ProvidersResponse,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use lookbook_core::{BatchRequest, GenerationRequest, LoraGenerationRequest};
use lookbook_error::{GenerationError, GenerationErrorKind, StorageError, StorageErrorKind};
use lookbook_interface::SessionStore;
use lookbook_pipeline::GenerationService;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// The orchestration service behind every generation endpoint.
    pub service: Arc<GenerationService>,
    /// Session store backing the history endpoints.
    pub store: Arc<dyn SessionStore>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(service: Arc<GenerationService>, store: Arc<dyn SessionStore>) -> Self {
        Self { service, store }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/providers", get(list_providers))
        .route("/generate", post(generate))
        .route("/batch-generate", post(batch_generate))
        .route("/lora-generate", post(lora_generate))
        .route("/history", get(list_history))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .with_state(state)
}

fn generation_error(err: GenerationError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err.kind {
        GenerationErrorKind::ModelNotReady { status, .. } if status == "missing" => {
            StatusCode::NOT_FOUND
        }
        _ if err.is_user_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(err.kind)))
}

fn storage_error(err: StorageError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err.kind {
        StorageErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(err.kind)))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List registered provider identifiers.
#[instrument(skip(state))]
async fn list_providers(State(state): State<ApiState>) -> impl IntoResponse {
    let registry = state.service.registry();
    (
        StatusCode::OK,
        Json(ProvidersResponse {
            image_generation: registry.image_generation_ids(),
            try_on: registry.try_on_ids(),
            lora: registry.lora().is_ok(),
        }),
    )
}

/// Run the two-stage pipeline for one garment.
#[instrument(skip_all)]
async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerationRequest>,
) -> impl IntoResponse {
    match state.service.generate(&request).await {
        Ok(output) => (
            StatusCode::OK,
            Json(GenerateResponse {
                success: true,
                images: output.images,
                warnings: output.warnings,
                session_id: output.session_id,
            }),
        )
            .into_response(),
        Err(err) => generation_error(err).into_response(),
    }
}

/// Run the pipeline across a batch of garments.
#[instrument(skip_all)]
async fn batch_generate(
    State(state): State<ApiState>,
    Json(request): Json<BatchRequest>,
) -> impl IntoResponse {
    match state.service.batch_generate(&request).await {
        Ok(output) => (
            StatusCode::OK,
            Json(BatchResponse {
                success: true,
                results: output.results,
                summary: output.summary,
                session_id: output.session_id,
            }),
        )
            .into_response(),
        Err(err) => generation_error(err).into_response(),
    }
}

/// Generate a single image through a trained style model.
#[instrument(skip_all)]
async fn lora_generate(
    State(state): State<ApiState>,
    Json(request): Json<LoraGenerationRequest>,
) -> impl IntoResponse {
    match state.service.lora_generate(&request).await {
        Ok(image) => (
            StatusCode::OK,
            Json(LoraGenerateResponse {
                success: true,
                image,
            }),
        )
            .into_response(),
        Err(err) => generation_error(err).into_response(),
    }
}

/// List recent generation history, newest first.
#[instrument(skip(state))]
async fn list_history(
    State(state): State<ApiState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    match state.store.list_history(query.limit).await {
        Ok(history) => (
            StatusCode::OK,
            Json(HistoryResponse {
                success: true,
                history,
            }),
        )
            .into_response(),
        Err(err) => storage_error(err).into_response(),
    }
}

/// Fetch one session with its full image list.
#[instrument(skip(state))]
async fn get_session(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get_session(id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(err) => storage_error(err).into_response(),
    }
}

/// Delete a session and its history entry.
#[instrument(skip(state))]
async fn delete_session(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.delete_session(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(err) => storage_error(err).into_response(),
    }
}
