//! Tests for the filesystem and in-memory snapshot stores.

use storefront_core::{Product, Rating, decode_products, encode_products};
use storefront_store::{FileSystemStore, MemoryStore, SNAPSHOT_KEY, SnapshotStore};
use tempfile::TempDir;

fn sample_products() -> Vec<Product> {
    (1..=3)
        .map(|id| {
            Product::builder()
                .id(id)
                .title(format!("Item {}", id))
                .price(id as f64 * 2.5)
                .category("electronics")
                .rating(Rating { rate: 4.0, count: id })
                .build()
                .unwrap()
        })
        .collect()
}

#[tokio::test]
async fn test_missing_key_loads_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert_eq!(store.load(SNAPSHOT_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    let products = sample_products();
    let snapshot = encode_products(&products).unwrap();
    store.save(SNAPSHOT_KEY, &snapshot).await.unwrap();

    let loaded = store.load(SNAPSHOT_KEY).await.unwrap().unwrap();
    assert_eq!(decode_products(&loaded).unwrap(), products);
    assert!(temp_dir.path().join("products.json").exists());
    assert!(!temp_dir.path().join("products.json.tmp").exists());
}

#[tokio::test]
async fn test_save_replaces_previous_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.save(SNAPSHOT_KEY, "[1]").await.unwrap();
    store.save(SNAPSHOT_KEY, "[]").await.unwrap();

    assert_eq!(store.load(SNAPSHOT_KEY).await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_snapshot_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = FileSystemStore::new(temp_dir.path()).unwrap();
        store.save(SNAPSHOT_KEY, "[]").await.unwrap();
    }

    let reopened = FileSystemStore::new(temp_dir.path()).unwrap();
    assert_eq!(reopened.load(SNAPSHOT_KEY).await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_creates_nested_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let store = FileSystemStore::new(&nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}

#[tokio::test]
async fn test_rejects_keys_that_escape_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert!(store.save("../outside", "[]").await.is_err());
    assert!(store.load("").await.is_err());
    assert!(store.path_for("products_v2").is_ok());
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.save(SNAPSHOT_KEY, "[]").await.unwrap();
    store.remove(SNAPSHOT_KEY).await.unwrap();
    store.remove(SNAPSHOT_KEY).await.unwrap();

    assert_eq!(store.load(SNAPSHOT_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_memory_store_failure_injection() {
    let store = MemoryStore::with_entry(SNAPSHOT_KEY, "[]");
    store.fail_writes(true);

    assert!(store.save(SNAPSHOT_KEY, "[1]").await.is_err());
    assert_eq!(store.peek(SNAPSHOT_KEY).as_deref(), Some("[]"));
    assert_eq!(store.save_count(), 0);

    store.fail_writes(false);
    store.save(SNAPSHOT_KEY, "[1]").await.unwrap();
    assert_eq!(store.load(SNAPSHOT_KEY).await.unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.backend_name(), "memory");
}
