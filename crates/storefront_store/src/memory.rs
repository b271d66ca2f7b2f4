//! In-memory snapshot storage.

use crate::SnapshotStore;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use storefront_error::{StoreError, StoreErrorKind, StorefrontResult};

/// Snapshot store backed by a `HashMap`.
///
/// Nothing survives the process. Write failures can be switched on with
/// [`MemoryStore::fail_writes`] to exercise best-effort persistence paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `snapshot` already saved under `key`.
    pub fn with_entry(key: impl Into<String>, snapshot: impl Into<String>) -> Self {
        let store = Self::default();
        store.lock().insert(key.into(), snapshot.into());
        store
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current value under `key`, read synchronously.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> StorefrontResult<Option<String>> {
        Ok(self.peek(key))
    }

    #[tracing::instrument(skip(self, snapshot), fields(bytes = snapshot.len()))]
    async fn save(&self, key: &str, snapshot: &str) -> StorefrontResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::new(StoreErrorKind::Unavailable(format!(
                "writes disabled for {}",
                key
            )))
            .into());
        }
        self.lock().insert(key.to_string(), snapshot.to_string());
        self.saves.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Saved snapshot in memory");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        self.lock().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
