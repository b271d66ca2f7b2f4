//! Filesystem-based snapshot storage.
//!
//! Each key maps to one file, `{base_path}/{key}.json`. Writes go to a
//! sibling temp file first and are renamed into place, so a reader never sees
//! a half-written snapshot.

use crate::SnapshotStore;
use std::path::{Path, PathBuf};
use storefront_error::{StoreError, StoreErrorKind, StorefrontResult};

/// Filesystem snapshot store.
///
/// # Example Structure
///
/// ```text
/// ~/.local/share/storefront/
/// └── products.json
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem store rooted at `base_path`.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorefrontResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem snapshot store");
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File that holds the value for `key`.
    ///
    /// Keys are limited to ASCII letters, digits, `-` and `_` so they can never
    /// escape the base directory.
    pub fn path_for(&self, key: &str) -> StorefrontResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::new(StoreErrorKind::InvalidKey(key.to_string())).into());
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl SnapshotStore for FileSystemStore {
    #[tracing::instrument(skip(self), fields(base = %self.base_path.display()))]
    async fn load(&self, key: &str) -> StorefrontResult<Option<String>> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(snapshot) => {
                tracing::debug!(path = %path.display(), bytes = snapshot.len(), "Loaded snapshot");
                Ok(Some(snapshot))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No snapshot stored");
                Ok(None)
            }
            Err(e) => Err(StoreError::new(StoreErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, snapshot), fields(bytes = snapshot.len()))]
    async fn save(&self, key: &str, snapshot: &str) -> StorefrontResult<()> {
        let path = self.path_for(key)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, snapshot).await.map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), bytes = snapshot.len(), "Saved snapshot");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Removed snapshot");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new(StoreErrorKind::FileWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
