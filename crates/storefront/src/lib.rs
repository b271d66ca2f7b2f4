//! Storefront - product catalog browser
//!
//! Storefront fetches a product catalog from a public REST endpoint, keeps a
//! JSON snapshot of it on disk, and lets you browse, extend and prune it from
//! a terminal UI or the command line.
//!
//! # Architecture
//!
//! Storefront is organized as a workspace with focused crates:
//!
//! - `storefront_error` - Error types
//! - `storefront_core` - Product model, catalog, snapshot codec, chart projection, configuration
//! - `storefront_store` - Snapshot persistence backends
//! - `storefront_client` - Remote catalog client
//! - `storefront_sync` - Cache-or-network synchronizer
//! - `storefront_tui` - Terminal UI
//!
//! This crate (`storefront`) re-exports everything for convenience.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storefront::{LogListener, StorefrontConfig, open};
//!
//! # async fn demo() -> storefront::StorefrontResult<()> {
//! let config = StorefrontConfig::load(None)?;
//! let mut catalog = open(&config)?;
//! let mut listener = LogListener;
//!
//! catalog.load(&mut listener).await;
//! catalog.settle(&mut listener).await;
//! println!("{} products", catalog.catalog().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod console;
mod report;

pub use console::ConsoleListener;
pub use report::{chart_lines, product_lines};

// Errors
pub use storefront_error::{
    ConfigError, ConfigErrorKind, HttpError, JsonError, JsonErrorKind, StoreError, StoreErrorKind,
    StorefrontError, StorefrontErrorKind, StorefrontResult, TuiError, TuiErrorKind,
};

// Core types
pub use storefront_core::{
    Catalog, CatalogConfig, ChartConfig, ChartPoint, PriceFormatter, Product, ProductBuilder,
    Rating, RatingFormatter, RemoteConfig, StoreConfig, StorefrontConfig, ValueFormatter,
    decode_product, decode_products, encode_products, project, top_rated,
};

// Persistence
pub use storefront_store::{FileSystemStore, MemoryStore, SNAPSHOT_KEY, SnapshotStore};

// Remote catalog
pub use storefront_client::{CatalogClient, HttpCatalogClient};

// Synchronization
pub use storefront_sync::{
    CatalogListener, CatalogSynchronizer, Completion, FetchKind, LoadOutcome, LoadSource,
    LogListener, Notice, SyncState,
};

// Terminal UI
pub use storefront_tui::{
    Action, App, AppMode, ProductListAdapter, ProductRow, RowActivation, run_tui, stars,
};

/// Synchronizer wired to the HTTP catalog and the on-disk snapshot.
pub type Storefront = CatalogSynchronizer<HttpCatalogClient, FileSystemStore>;

/// Build a synchronizer from configuration.
///
/// Creates the data directory if needed. Nothing is loaded yet; call
/// [`CatalogSynchronizer::load`] next.
#[tracing::instrument(skip(config), fields(base_url = %config.remote.base_url))]
pub fn open(config: &StorefrontConfig) -> StorefrontResult<Storefront> {
    config.validate()?;
    let client = HttpCatalogClient::new(&config.remote)?;
    let data_dir = config.data_dir()?;
    let store = FileSystemStore::new(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "Opened snapshot store");

    let ids = config.catalog.random_id_min..=config.catalog.random_id_max;
    Ok(CatalogSynchronizer::new(client, store).with_random_ids(ids))
}
