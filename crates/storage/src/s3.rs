//! S3 storage provider for production.

use aws_config::Region;
use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStore, StorageError};

/// Writes objects to an S3 bucket with public-read object URLs.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3Store {
    /// Build a client from the ambient AWS credential chain.
    pub async fn new(bucket: &str, region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket: bucket.to_string(),
            region: region.to_string(),
        }
    }

    /// Virtual-hosted-style public URL for an object key.
    fn public_url(&self, name: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{name}",
            self.bucket, self.region
        )
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(name)
            .content_type(content_type)
            .cache_control("max-age=3600")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|err| StorageError::S3 {
                name: name.to_string(),
                message: err.to_string(),
            })?;

        tracing::debug!(name, content_type, bucket = %self.bucket, "Stored S3 object");
        Ok(self.public_url(name))
    }
}
