//! Tests for the facade: wiring from configuration and the text reports.

use std::path::PathBuf;
use storefront::{
    CatalogListener, ConsoleListener, LogListener, Notice, Product, Rating, RatingFormatter,
    SNAPSHOT_KEY, SnapshotStore, StorefrontConfig, chart_lines, encode_products, open,
    product_lines, project,
};

fn product(id: u32, title: &str, price: f64, rate: f64) -> Product {
    Product::builder()
        .id(id)
        .title(title)
        .price(price)
        .rating(Rating { rate, count: 1 })
        .build()
        .unwrap()
}

fn config_in(dir: PathBuf) -> StorefrontConfig {
    let mut config = StorefrontConfig::bundled().unwrap();
    config.store.data_dir = Some(dir);
    // Unroutable; these tests must never reach the network
    config.remote.base_url = "http://127.0.0.1:9".to_string();
    config
}

#[test]
fn test_product_lines_show_index_price_and_stars() {
    let lines = product_lines(&[
        product(1, "Backpack", 109.95, 3.9),
        product(2, "Mug", 7.5, 5.0),
    ]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  0  Backpack"));
    assert!(lines[0].contains("$109.95"));
    assert!(lines[0].ends_with("★★★★☆"));
    assert!(lines[1].starts_with("  1  Mug     "));
    assert!(lines[1].contains("$7.50"));
}

#[test]
fn test_product_lines_empty() {
    assert!(product_lines(&[]).is_empty());
}

#[test]
fn test_chart_lines_scale_against_five() {
    let products = [product(1, "Full", 1.0, 5.0), product(2, "Half", 1.0, 2.5)];
    let points = project(&products, 5, 0, &RatingFormatter);

    let lines = chart_lines(&points, 10);

    assert_eq!(lines[0], format!("Full │{} 5.0", "█".repeat(10)));
    assert_eq!(lines[1], format!("Half │{} 2.5", "█".repeat(5)));
}

#[test]
fn test_open_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path().to_path_buf());
    config.catalog.random_id_min = 30;

    assert!(open(&config).is_err());
}

#[tokio::test]
async fn test_open_loads_snapshot_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path().join("data"));

    let seeded = vec![product(3, "Jacket", 55.99, 4.7)];
    let store = storefront::FileSystemStore::new(dir.path().join("data")).unwrap();
    store
        .save(SNAPSHOT_KEY, &encode_products(&seeded).unwrap())
        .await
        .unwrap();

    let mut catalog = open(&config).unwrap();
    let outcome = catalog.load(&mut LogListener).await;

    assert_eq!(outcome, storefront::LoadOutcome::FromStore(1));
    assert_eq!(catalog.catalog().products(), seeded.as_slice());
    assert_eq!(catalog.pending(), 0);
}

#[test]
fn test_console_listener_counts_only_failures() {
    let mut listener = ConsoleListener::default();
    listener.notice(Notice::Added {
        title: "Mug".to_string(),
    });
    listener.notice(Notice::PersistFailed {
        message: "disk full".to_string(),
    });

    assert_eq!(listener.failures(), 1);
}

#[tokio::test]
async fn test_failed_refresh_is_counted() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path().to_path_buf());
    let mut catalog = open(&config).unwrap();
    let mut listener = ConsoleListener::default();

    catalog.refresh();
    catalog.settle(&mut listener).await;

    assert_eq!(listener.failures(), 1);
    assert!(catalog.catalog().is_empty());
}
