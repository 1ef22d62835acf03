//! Local filesystem asset store for thumbnails.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Writes public assets under a fixed root directory, served at a fixed
/// base URL.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
    base_url: String,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create the asset root if it does not exist yet.
    pub async fn ensure_root(&self) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::local_write(format!("creating asset root: {e}")))?;
        Ok(())
    }

    /// Write all bytes of an asset to `{root}/{key}`.
    pub async fn put(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.root.join(key);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| StorageError::local_write(format!("writing {}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = data.len(), "Wrote asset");
        Ok(())
    }

    /// Public URL at which a stored asset is addressable.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_asset_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path(), "http://localhost:8091/assets");
        store.ensure_root().await.unwrap();

        store.put("abc.png", b"png bytes").await.unwrap();

        let written = std::fs::read(dir.path().join("abc.png")).unwrap();
        assert_eq!(written, b"png bytes");
    }

    #[tokio::test]
    async fn write_to_missing_root_is_a_local_write_error() {
        let store = AssetStore::new("/nonexistent/clipdock-assets", "http://localhost/assets");
        let err = store.put("abc.png", b"data").await.unwrap_err();
        assert!(matches!(err, StorageError::LocalWrite(_)));
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = AssetStore::new("/tmp/assets", "http://localhost:8091/assets/");
        assert_eq!(
            store.public_url("abc.png"),
            "http://localhost:8091/assets/abc.png"
        );
    }
}
