// Copyright 2025 Cowboy AI, LLC.

//! End-to-end tests for the CreateCategory use case over the in-memory store

use std::sync::Arc;

use catalog_domain::{
    CreateCategory, CreateCategoryError, CreateCategoryInput, CreateCategoryStage,
    InMemoryCategoryStore, UseCase,
};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

fn wire(store: &InMemoryCategoryStore) -> CreateCategory {
    CreateCategory::new(
        Arc::new(store.repository()),
        Arc::new(store.unit_of_work()),
    )
}

#[tokio::test]
async fn test_creates_and_commits_category() {
    let store = InMemoryCategoryStore::new();
    let use_case = wire(&store);
    let input = CreateCategoryInput::new("Electronics", "Consumer electronics", true);

    let output = use_case
        .handle(input, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!output.id.is_nil());
    assert_ne!(output.created_at, DateTime::<Utc>::default());
    assert_eq!(output.name, "Electronics");
    assert_eq!(output.description, "Consumer electronics");
    assert!(output.is_active);

    assert_eq!(store.insert_calls().await, 1);
    assert_eq!(store.commit_calls().await, 1);
    assert!(store.staged().await.is_empty());

    let committed = store.committed().await;
    assert_eq!(committed.len(), 1);
    assert_eq!(*committed[0].id().as_uuid(), output.id);
    assert_eq!(committed[0].created_at(), output.created_at);
}

#[tokio::test]
async fn test_name_too_short_never_reaches_store() {
    let store = InMemoryCategoryStore::new();
    let use_case = wire(&store);
    let input = CreateCategoryInput::new("ab", "...", true);

    let err = use_case
        .handle(input, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CreateCategoryError::Validation(_)));
    assert_eq!(err.to_string(), "Name should be at least 3 characters long");
    assert_eq!(store.insert_calls().await, 0);
    assert_eq!(store.commit_calls().await, 0);
}

#[tokio::test]
async fn test_insert_failure_leaves_nothing_committed() {
    let store = InMemoryCategoryStore::new();
    let use_case = wire(&store);
    store.fail_next_insert("replica unavailable").await;

    let err = use_case
        .handle(
            CreateCategoryInput::new("Electronics", "Consumer electronics", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(err.is_persistence_error());
    assert_eq!(err.to_string(), "replica unavailable");
    assert_eq!(store.commit_calls().await, 0);
    assert!(store.committed().await.is_empty());
}

#[tokio::test]
async fn test_commit_failure_leaves_nothing_committed() {
    let store = InMemoryCategoryStore::new();
    let use_case = wire(&store);
    store.fail_next_commit("write conflict").await;

    let err = use_case
        .handle(
            CreateCategoryInput::new("Electronics", "Consumer electronics", false),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(err.is_commit_error());
    assert_eq!(err.stage(), CreateCategoryStage::Commit);
    assert_eq!(store.insert_calls().await, 1);
    assert!(store.committed().await.is_empty());
}

#[tokio::test]
async fn test_cancelled_token_abandons_invocation() {
    let store = InMemoryCategoryStore::new();
    let use_case = wire(&store);
    let token = CancellationToken::new();
    token.cancel();

    let err = use_case
        .handle(
            CreateCategoryInput::new("Electronics", "Consumer electronics", true),
            &token,
        )
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(store.insert_calls().await, 0);
    assert_eq!(store.commit_calls().await, 0);
}

/// Concurrent invocations each build and commit their own category
#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let store = InMemoryCategoryStore::new();
    let use_case = Arc::new(wire(&store));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let use_case = Arc::clone(&use_case);
            tokio::spawn(async move {
                let input =
                    CreateCategoryInput::new(format!("Category {i}"), "Concurrent fixture", true);
                use_case.handle(input, &CancellationToken::new()).await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(store.committed().await.len(), 8);
}

#[tokio::test]
async fn test_output_round_trips_through_json() {
    let store = InMemoryCategoryStore::new();
    let output = wire(&store)
        .handle(
            CreateCategoryInput::new("Books", "", true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["id"], serde_json::json!(output.id.to_string()));
    assert_eq!(json["isActive"], true);
    assert_eq!(json["description"], "");
}
