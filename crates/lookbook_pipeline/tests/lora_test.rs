//! Tests for the single-image LoRA generation path.

mod support;

use lookbook_core::{LoraGenerationRequest, LoraStatus, Pose};
use lookbook_error::GenerationErrorKind;
use lookbook_interface::{LoraModelRepository, ProviderRegistry};
use lookbook_pipeline::{DEFAULT_LORA_PROMPT, GenerationService, SessionRecorder};
use lookbook_storage::InMemoryLoraModelRepository;
use std::sync::Arc;
use support::{MockLora, lora_model};

fn service(lora: Arc<MockLora>, models: Arc<InMemoryLoraModelRepository>) -> GenerationService {
    let registry = ProviderRegistry::builder().lora(lora).build();
    GenerationService::new(Arc::new(registry), models, SessionRecorder::disabled())
}

fn request(model_id: &str) -> LoraGenerationRequest {
    LoraGenerationRequest {
        lora_model_id: model_id.to_string(),
        prompt: None,
        garment_image: None,
        pose: None,
        seed: None,
    }
}

#[tokio::test]
async fn generates_with_default_prompt_and_front_pose() {
    let lora = Arc::new(MockLora::available("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Completed))
        .await
        .unwrap();
    let service = service(lora.clone(), models);

    let image = service.lora_generate(&request("style-1")).await.unwrap();

    assert_eq!(image.pose, Pose::Front);
    assert_eq!(image.provider, "LoRA: style-1 style");
    let prompts = lora.seen_prompts.lock().unwrap();
    assert_eq!(prompts.as_slice(), [DEFAULT_LORA_PROMPT.to_string()]);
}

#[tokio::test]
async fn caller_prompt_and_pose_override_the_defaults() {
    let lora = Arc::new(MockLora::available("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Completed))
        .await
        .unwrap();
    let service = service(lora.clone(), models);

    let mut req = request("style-1");
    req.prompt = Some("editorial rooftop shoot at dusk".to_string());
    req.pose = Some(Pose::Styled);
    req.seed = Some(99);
    let image = service.lora_generate(&req).await.unwrap();

    assert_eq!(image.pose, Pose::Styled);
    assert_eq!(image.settings.seed, Some(99));
    let prompts = lora.seen_prompts.lock().unwrap();
    assert_eq!(prompts.as_slice(), ["editorial rooftop shoot at dusk".to_string()]);
}

#[tokio::test]
async fn blank_prompt_falls_back_to_the_default() {
    let lora = Arc::new(MockLora::available("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Completed))
        .await
        .unwrap();
    let service = service(lora.clone(), models);

    let mut req = request("style-1");
    req.prompt = Some("   ".to_string());
    service.lora_generate(&req).await.unwrap();

    let prompts = lora.seen_prompts.lock().unwrap();
    assert_eq!(prompts.as_slice(), [DEFAULT_LORA_PROMPT.to_string()]);
}

#[tokio::test]
async fn missing_model_is_not_ready() {
    let lora = Arc::new(MockLora::available("mock-lora"));
    let service = service(lora.clone(), Arc::new(InMemoryLoraModelRepository::new()));

    let err = service.lora_generate(&request("ghost")).await.unwrap_err();

    match err.kind {
        GenerationErrorKind::ModelNotReady { id, status } => {
            assert_eq!(id, "ghost");
            assert_eq!(status, "missing");
        }
        other => panic!("expected ModelNotReady, got {other:?}"),
    }
    assert_eq!(lora.call_count(), 0);
}

#[tokio::test]
async fn failed_training_status_is_not_ready() {
    let lora = Arc::new(MockLora::available("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Failed))
        .await
        .unwrap();
    let service = service(lora.clone(), models);

    let err = service.lora_generate(&request("style-1")).await.unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::ModelNotReady { .. }
    ));
    assert_eq!(lora.call_count(), 0);
}

#[tokio::test]
async fn unavailable_backend_is_rejected() {
    let lora = Arc::new(MockLora::unavailable("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Completed))
        .await
        .unwrap();
    let service = service(lora.clone(), models);

    let err = service.lora_generate(&request("style-1")).await.unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::ProviderUnavailable(_)
    ));
    assert_eq!(lora.call_count(), 0);
}

#[tokio::test]
async fn backend_failure_is_a_generation_error() {
    let lora = Arc::new(MockLora::failing("mock-lora"));
    let models = Arc::new(InMemoryLoraModelRepository::new());
    models
        .insert(lora_model("style-1", LoraStatus::Completed))
        .await
        .unwrap();
    let service = service(lora, models);

    let err = service.lora_generate(&request("style-1")).await.unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::GenerationFailed(_)));
}

#[tokio::test]
async fn no_lora_backend_registered_is_an_unknown_provider() {
    let registry = ProviderRegistry::builder().build();
    let service = GenerationService::new(
        Arc::new(registry),
        Arc::new(InMemoryLoraModelRepository::new()),
        SessionRecorder::disabled(),
    );

    let err = service.lora_generate(&request("style-1")).await.unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::UnknownProvider(_)));
}
