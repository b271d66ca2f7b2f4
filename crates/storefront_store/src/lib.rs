//! Key-value snapshot persistence for Storefront.
//!
//! The catalog is persisted as one serialized snapshot under a fixed key.
//! Backends implement [`SnapshotStore`]; the crate ships a filesystem backend
//! for real use and an in-memory backend for tests and ephemeral sessions.
//!
//! There is no schema versioning and no migration: a snapshot is whatever
//! string was last saved under its key.
//!
//! # Example
//!
//! ```rust
//! use storefront_store::{FileSystemStore, SnapshotStore, SNAPSHOT_KEY};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemStore::new("/tmp/storefront")?;
//!
//! store.save(SNAPSHOT_KEY, "[]").await?;
//! assert_eq!(store.load(SNAPSHOT_KEY).await?.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

use storefront_error::StorefrontResult;

mod filesystem;
mod memory;

pub use filesystem::FileSystemStore;
pub use memory::MemoryStore;
pub use storefront_error::{StoreError, StoreErrorKind};

/// Key under which the full catalog snapshot is stored.
pub const SNAPSHOT_KEY: &str = "products";

/// Trait for pluggable snapshot storage backends.
#[async_trait::async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the snapshot stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when nothing has been saved under `key`.
    async fn load(&self, key: &str) -> StorefrontResult<Option<String>>;

    /// Store `snapshot` under `key`, replacing any previous value.
    async fn save(&self, key: &str, snapshot: &str) -> StorefrontResult<()>;

    /// Forget the value under `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorefrontResult<()>;

    /// Backend name for logging (e.g., "filesystem", "memory").
    fn backend_name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl<T: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<T> {
    async fn load(&self, key: &str) -> StorefrontResult<Option<String>> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, snapshot: &str) -> StorefrontResult<()> {
        (**self).save(key, snapshot).await
    }

    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        (**self).remove(key).await
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
