use super::*;
use crate::item::Category;
use crate::store::MemoryKeyValueStore;
use std::sync::Arc;

fn item(id: i64, name: &str) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        category: Category::Dairy,
        expiry_date: "2025-01-05".to_string(),
        added_date: "2025-01-01T00:00:00.000Z".to_string(),
    }
}

fn ids(items: &[FoodItem]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

#[tokio::test]
async fn test_load_all_empty_store() {
    let store = ItemStore::new(MemoryKeyValueStore::new());
    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn test_load_all_corrupt_blob_is_empty() {
    let store = ItemStore::new(MemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, "{not json"));

    assert!(store.load_all().await.is_empty());
    assert!(matches!(store.try_load_all().await, Err(StoreError::JsonError(_))));
}

#[tokio::test]
async fn test_load_all_read_failure_is_empty() {
    let backend = MemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, "[]");
    backend.set_fail_reads(true);
    let store = ItemStore::new(backend);

    assert!(store.load_all().await.is_empty());
}

#[tokio::test]
async fn test_add_prepends() {
    let store = ItemStore::new(MemoryKeyValueStore::new());

    store.add(item(1, "Milk")).await;
    let returned = store.add(item(2, "Eggs")).await;

    assert_eq!(ids(&returned), [2, 1]);
    assert_eq!(store.load_all().await, returned);
}

#[tokio::test]
async fn test_add_does_not_check_collisions() {
    let store = ItemStore::new(MemoryKeyValueStore::new());

    store.add(item(1, "Milk")).await;
    store.add(item(1, "Also milk")).await;

    assert_eq!(store.load_all().await.len(), 2);
}

#[tokio::test]
async fn test_remove_drops_every_match() {
    let store = ItemStore::new(MemoryKeyValueStore::new());
    store
        .save_all(&[item(1, "a"), item(2, "b"), item(1, "c")])
        .await
        .unwrap();

    let remaining = store.remove(1).await;

    assert_eq!(ids(&remaining), [2]);
}

#[tokio::test]
async fn test_remove_unknown_id_is_noop() {
    let store = ItemStore::new(MemoryKeyValueStore::new());
    store.save_all(&[item(1, "a"), item(2, "b")]).await.unwrap();

    let remaining = store.remove(99).await;

    assert_eq!(ids(&remaining), [1, 2]);
}

#[tokio::test]
async fn test_save_all_failure_is_returned() {
    let backend = MemoryKeyValueStore::new();
    backend.set_fail_writes(true);
    let store = ItemStore::new(backend);

    let result = store.save_all(&[item(1, "a")]).await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[tokio::test]
async fn test_add_with_failing_write_returns_attempted_collection() {
    let store = ItemStore::new(MemoryKeyValueStore::new());
    store.add(item(1, "Milk")).await;
    store.backend().set_fail_writes(true);

    let attempted = store.add(item(2, "Eggs")).await;

    assert_eq!(ids(&attempted), [2, 1]);
    assert_eq!(ids(&store.load_all().await), [1]);
}

#[tokio::test]
async fn test_custom_key() {
    let store = ItemStore::with_key(MemoryKeyValueStore::new(), "@pantry");
    store.add(item(1, "Milk")).await;

    assert_eq!(store.key(), "@pantry");
    assert!(store.backend().get("@pantry").await.unwrap().is_some());
    assert!(store.backend().get(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_adds_keep_every_item() {
    let store = Arc::new(ItemStore::new(MemoryKeyValueStore::new()));

    let handles: Vec<_> = (1..=20)
        .map(|id| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.add(item(id, "x")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.load_all().await.len(), 20);
}
