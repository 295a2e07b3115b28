//! Null media host provider for testing and development

use std::path::Path;

use async_trait::async_trait;

use digistore_domain::entities::ImageDetails;
use digistore_domain::error::Result;
use digistore_domain::ports::MediaHostProvider;
use digistore_domain::value_objects::{ImageTransform, UploadedImage};

/// Null media host provider
///
/// Uploads succeed without touching the filesystem or the network and
/// return a synthetic URL derived from the public id.
pub struct NullMediaHostProvider;

impl NullMediaHostProvider {
    /// Create a new null media provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullMediaHostProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaHostProvider for NullMediaHostProvider {
    async fn upload(
        &self,
        _file_path: &Path,
        folder: &str,
        public_id: &str,
        transform: ImageTransform,
    ) -> Result<UploadedImage> {
        Ok(UploadedImage {
            secure_url: format!("https://media.invalid/{folder}/{public_id}.png"),
            details: ImageDetails {
                public_id: public_id.to_string(),
                format: Some("png".to_string()),
                bytes: Some(0),
                width: Some(transform.width),
                height: Some(transform.height),
            },
        })
    }

    async fn destroy(&self, _public_id: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
