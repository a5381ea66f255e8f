//! Storage configuration loaded from environment variables.

use crate::StorageError;

/// Which provider backs the upload gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

impl StorageBackend {
    /// Parse from the `STORAGE_BACKEND` env value.
    pub fn from_name(name: &str) -> Result<Self, StorageError> {
        match name {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(StorageError::Config(format!(
                "Unknown storage backend '{other}'. Must be one of: local, s3"
            ))),
        }
    }
}

/// Upload-gateway storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the local provider.
    pub local_root: String,
    /// URL prefix under which locally stored objects are served.
    pub public_base_url: String,
    /// Bucket for the S3 provider.
    pub s3_bucket: String,
    /// Region for the S3 provider.
    pub s3_region: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                           |
    /// |-------------------|-----------------------------------|
    /// | `STORAGE_BACKEND` | `local`                           |
    /// | `UPLOAD_DIR`      | `uploads`                         |
    /// | `PUBLIC_BASE_URL` | `http://localhost:3000/uploads`   |
    /// | `S3_BUCKET`       | -- (required for `s3`)            |
    /// | `S3_REGION`       | -- (required for `s3`)            |
    pub fn from_env() -> Result<Self, StorageError> {
        let backend =
            StorageBackend::from_name(&env_or("STORAGE_BACKEND", "local"))?;

        let config = Self {
            backend,
            local_root: env_or("UPLOAD_DIR", "uploads"),
            public_base_url: env_or("PUBLIC_BASE_URL", "http://localhost:3000/uploads"),
            s3_bucket: std::env::var("S3_BUCKET").unwrap_or_default(),
            s3_region: std::env::var("S3_REGION").unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the selected backend has the fields it requires.
    ///
    /// - `local`: requires a non-empty upload directory
    /// - `s3`: requires non-empty bucket and region
    pub fn validate(&self) -> Result<(), StorageError> {
        match self.backend {
            StorageBackend::Local => {
                if self.local_root.trim().is_empty() {
                    return Err(StorageError::Config(
                        "Backend 'local' requires a non-empty UPLOAD_DIR".into(),
                    ));
                }
            }
            StorageBackend::S3 => {
                for (field, value) in [("S3_BUCKET", &self.s3_bucket), ("S3_REGION", &self.s3_region)]
                {
                    if value.trim().is_empty() {
                        return Err(StorageError::Config(format!(
                            "Backend 's3' requires a non-empty {field}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
