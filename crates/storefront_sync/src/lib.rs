//! Catalog synchronization: cache-or-network sourcing and persistence.
//!
//! [`CatalogSynchronizer`] owns the in-memory [`Catalog`](storefront_core::Catalog)
//! and is the only thing that mutates it. Network fetches run on spawned
//! tokio tasks and report back through a completion channel; the owner pulls
//! completions with [`CatalogSynchronizer::next_completion`] and applies them
//! on its own task, so UI state is never touched from a worker.
//!
//! Every mutation follows the same order: mutate the catalog, tell the
//! [`CatalogListener`] the products changed, persist the snapshot, then post a
//! user-visible [`Notice`].
//!
//! # Example
//!
//! ```no_run
//! use storefront_client::HttpCatalogClient;
//! use storefront_core::StorefrontConfig;
//! use storefront_store::FileSystemStore;
//! use storefront_sync::{CatalogSynchronizer, LogListener};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig::load(None)?;
//! let client = HttpCatalogClient::new(&config.remote)?;
//! let store = FileSystemStore::new(config.data_dir()?)?;
//!
//! let mut sync = CatalogSynchronizer::new(client, store);
//! let mut listener = LogListener;
//! sync.load(&mut listener).await;
//! sync.settle(&mut listener).await;
//! println!("{} products", sync.catalog().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod listener;
mod synchronizer;

pub use listener::{CatalogListener, LoadSource, LogListener, Notice};
pub use synchronizer::{CatalogSynchronizer, Completion, FetchKind, LoadOutcome, SyncState};
