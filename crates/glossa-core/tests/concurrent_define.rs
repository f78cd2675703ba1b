use std::sync::Arc;

use glossa_core::{Dictionary, DictionaryService, StoreError, WordStore, file};
use glossa_types::{ResponseCode, WordRequest};
use tempfile::TempDir;

async fn empty_store() -> (Arc<WordStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = WordStore::open(temp_dir.path().join("dictionary.json"))
        .await
        .unwrap();
    (Arc::new(store), temp_dir)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_defines_on_same_key() {
    let (store, _temp_dir) = empty_store().await;

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.define("fox", "en", "a small wild canine").await }
    });
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.define("FOX", "EN", "a cunning animal").await }
    });

    let results = [first.await.unwrap(), second.await.unwrap()];

    let inserted = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::DuplicateKey { .. })))
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(duplicates, 1);

    let in_memory = store.entries().await;
    let on_disk = file::read_entries(store.path()).await.unwrap();
    assert_eq!(in_memory.len(), 1);
    assert_eq!(on_disk, in_memory);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_racing_requests_through_service() {
    let (store, _temp_dir) = empty_store().await;
    let service = Arc::new(DictionaryService::new(Arc::clone(&store)));

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..16 {
        let service = Arc::clone(&service);
        tasks.spawn(async move {
            let definition = format!("definition {i}");
            service
                .define_word(WordRequest::define("fox", "en", definition))
                .await
                .code
        });
    }

    let mut successes = 0;
    while let Some(code) = tasks.join_next().await {
        if code.unwrap() == ResponseCode::Success {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.len().await, 1);
    assert_eq!(file::read_entries(store.path()).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_distinct_keys_all_persist() {
    let (store, _temp_dir) = empty_store().await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let store = Arc::clone(&store);
        tasks.spawn(async move { store.define(&format!("word{i}"), "en", "def").await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    assert_eq!(store.len().await, 20);

    let on_disk = file::read_entries(store.path()).await.unwrap();
    assert_eq!(on_disk, store.entries().await);

    // A fresh process sees the same list
    let reopened = WordStore::open(store.path()).await.unwrap();
    assert_eq!(reopened.entries().await, on_disk);
}
