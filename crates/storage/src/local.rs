//! Local-filesystem storage provider for development.

use std::path::PathBuf;

use crate::{ObjectStore, StorageError};

/// Writes objects into a directory served as static files by the API
/// server.
pub struct LocalStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStore {
    /// Create the store, ensuring the target directory exists.
    pub async fn new(root: &str, public_base_url: &str) -> Result<Self, StorageError> {
        let root = PathBuf::from(root);
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| StorageError::Io {
                name: root.display().to_string(),
                source,
            })?;

        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ObjectStore for LocalStore {
    async fn put(
        &self,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let path = self.root.join(name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| StorageError::Io {
                name: name.to_string(),
                source,
            })?;

        tracing::debug!(name, content_type, size = bytes.len(), "Stored local object");
        Ok(format!("{}/{name}", self.public_base_url))
    }
}
