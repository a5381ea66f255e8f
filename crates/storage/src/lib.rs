//! Object storage boundary for the upload gateway.
//!
//! Uploads pass through an [`ObjectStore`]: bytes in, publicly
//! resolvable URL out. Two providers are supplied -- a local-filesystem
//! store for development and an S3 store for production -- selected by
//! [`StorageConfig`].

pub mod config;
pub mod local;
pub mod name;
pub mod s3;

use std::sync::Arc;

pub use config::{StorageBackend, StorageConfig};
pub use local::LocalStore;
pub use name::object_name;
pub use s3::S3Store;

/// Errors from storage providers and configuration.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Config(String),

    #[error("I/O error writing object '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("S3 error writing object '{name}': {message}")]
    S3 { name: String, message: String },
}

/// A write-only object store that returns a public URL per object.
///
/// No deduplication, no overwrite protection beyond the randomness of
/// the generated object names.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `name` and return the object's public URL.
    async fn put(
        &self,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}

/// Build the configured provider.
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match config.backend {
        StorageBackend::Local => {
            let store = LocalStore::new(&config.local_root, &config.public_base_url).await?;
            Ok(Arc::new(store))
        }
        StorageBackend::S3 => {
            let store = S3Store::new(&config.s3_bucket, &config.s3_region).await;
            Ok(Arc::new(store))
        }
    }
}
