//! Tests for the in-memory session store.

use lookbook_core::{
    GeneratedImage, GenerationSettings, ImageRef, Pose, ProviderSelection, SessionStatus,
};
use lookbook_interface::SessionStore;
use lookbook_storage::InMemorySessionStore;

fn providers() -> ProviderSelection {
    ProviderSelection {
        image_generation: "replicate-flux".to_string(),
        try_on: "idm-vton".to_string(),
    }
}

fn image(pose: Pose) -> GeneratedImage {
    GeneratedImage::new(
        ImageRef::Url("https://replicate.delivery/out.png".to_string()),
        pose,
        GenerationSettings::default(),
        "replicate-flux + idm-vton",
    )
}

#[tokio::test]
async fn create_and_get_session() {
    let store = InMemorySessionStore::new();
    let session = store
        .create_session(
            vec![ImageRef::Url("https://cdn.example/garment.png".to_string())],
            GenerationSettings::default(),
            providers(),
            None,
        )
        .await
        .unwrap();

    let loaded = store.get_session(session.id).await.unwrap();
    assert_eq!(loaded.id, session.id);
    assert!(loaded.generated_images.is_empty());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn append_updates_session_and_history() {
    let store = InMemorySessionStore::new();
    let session = store
        .create_session(
            vec![ImageRef::Url("https://cdn.example/garment.png".to_string())],
            GenerationSettings::default(),
            providers(),
            None,
        )
        .await
        .unwrap();

    let updated = store
        .append_images(session.id, &[image(Pose::Front), image(Pose::Side)])
        .await
        .unwrap();
    assert_eq!(updated.generated_images.len(), 2);
    assert!(updated.updated_at >= session.updated_at);

    let history = store.list_history(10).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].session_id, session.id);
    assert_eq!(history[0].image_count, 2);
    assert_eq!(history[0].garment_count, 1);
    assert_eq!(history[0].status, SessionStatus::Completed);
    assert!(history[0].thumbnail.is_some());
}

#[tokio::test]
async fn append_is_additive_not_deduplicating() {
    let store = InMemorySessionStore::new();
    let session = store
        .create_session(vec![], GenerationSettings::default(), providers(), None)
        .await
        .unwrap();

    let batch = vec![image(Pose::Front)];
    store.append_images(session.id, &batch).await.unwrap();
    let after_second = store.append_images(session.id, &batch).await.unwrap();

    // Same image list appended twice doubles the session length.
    assert_eq!(after_second.generated_images.len(), 2);
    let history = store.list_history(10).await.unwrap();
    assert_eq!(history[0].image_count, 2);
}

#[tokio::test]
async fn session_length_is_monotonic() {
    let store = InMemorySessionStore::new();
    let session = store
        .create_session(vec![], GenerationSettings::default(), providers(), None)
        .await
        .unwrap();

    let mut last_len = 0;
    for _ in 0..5 {
        let updated = store
            .append_images(session.id, &[image(Pose::Detail)])
            .await
            .unwrap();
        assert!(updated.generated_images.len() > last_len);
        last_len = updated.generated_images.len();
    }
}

#[tokio::test]
async fn append_to_unknown_session_fails() {
    let store = InMemorySessionStore::new();
    let result = store
        .append_images(uuid::Uuid::new_v4(), &[image(Pose::Front)])
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_sessions_newest_first() {
    let store = InMemorySessionStore::new();
    let first = store
        .create_session(vec![], GenerationSettings::default(), providers(), None)
        .await
        .unwrap();
    let second = store
        .create_session(vec![], GenerationSettings::default(), providers(), None)
        .await
        .unwrap();

    let sessions = store.list_sessions(10).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, second.id);
    assert_eq!(sessions[1].id, first.id);

    let limited = store.list_sessions(1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, second.id);
}

#[tokio::test]
async fn delete_cascades_to_history() {
    let store = InMemorySessionStore::new();
    let session = store
        .create_session(vec![], GenerationSettings::default(), providers(), None)
        .await
        .unwrap();
    store
        .append_images(session.id, &[image(Pose::Front)])
        .await
        .unwrap();

    store.delete_session(session.id).await.unwrap();

    assert!(store.get_session(session.id).await.is_err());
    assert!(store.list_history(10).await.unwrap().is_empty());
    assert!(store.list_sessions(10).await.unwrap().is_empty());
    assert!(store.is_empty().await);
}
