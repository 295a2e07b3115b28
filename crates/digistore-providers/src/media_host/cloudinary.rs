//! Cloudinary Media Host Provider
//!
//! Implements the MediaHostProvider port against the Cloudinary upload
//! API: multipart upload with a signed parameter set, destroy with cache
//! invalidation. Signatures are SHA-256 over the alphabetically sorted
//! parameters with the API secret appended.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use sha2::{Digest, Sha256};

use digistore_domain::entities::ImageDetails;
use digistore_domain::error::{Error, Result};
use digistore_domain::ports::MediaHostProvider;
use digistore_domain::value_objects::{ImageTransform, UploadedImage};

use crate::constants::{CLOUDINARY_API_BASE, ERROR_MSG_REQUEST_TIMEOUT};
use crate::utils::HttpResponseUtils;

/// Cloudinary media host provider
///
/// Receives the HTTP client via constructor injection; every request is
/// signed with the account's API secret.
pub struct CloudinaryMediaProvider {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    timeout: Duration,
    http_client: Client,
}

impl CloudinaryMediaProvider {
    /// Create a new Cloudinary media provider
    ///
    /// # Arguments
    /// * `cloud_name` - Cloudinary cloud name
    /// * `api_key` - API key
    /// * `api_secret` - API secret used for request signing
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            cloud_name,
            api_key,
            api_secret,
            timeout,
            http_client,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{CLOUDINARY_API_BASE}/{}/image/{action}", self.cloud_name)
    }

    fn map_request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::media_host(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
        } else {
            Error::media_host_with_source("HTTP request failed", e)
        }
    }

    /// Sign a parameter set: sorted `key=value` pairs joined with `&`,
    /// API secret appended, SHA-256 hex digest
    fn sign(&self, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);
        let to_sign: Vec<String> = sorted
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(to_sign.join("&"));
        hasher.update(&self.api_secret);
        hex::encode(hasher.finalize())
    }

    fn transform_string(transform: ImageTransform) -> String {
        format!("c_fit,w_{},h_{},q_auto", transform.width, transform.height)
    }

    fn parse_upload_response(value: &serde_json::Value) -> Result<UploadedImage> {
        let secure_url = value["secure_url"]
            .as_str()
            .ok_or_else(|| Error::media_host("upload response carries no secure_url"))?
            .to_string();
        let public_id = value["public_id"]
            .as_str()
            .ok_or_else(|| Error::media_host("upload response carries no public_id"))?
            .to_string();

        Ok(UploadedImage {
            secure_url,
            details: ImageDetails {
                public_id,
                format: value["format"].as_str().map(str::to_string),
                bytes: value["bytes"].as_u64(),
                width: value["width"].as_u64().and_then(|w| u32::try_from(w).ok()),
                height: value["height"].as_u64().and_then(|h| u32::try_from(h).ok()),
            },
        })
    }
}

#[async_trait]
impl MediaHostProvider for CloudinaryMediaProvider {
    async fn upload(
        &self,
        file_path: &Path,
        folder: &str,
        public_id: &str,
        transform: ImageTransform,
    ) -> Result<UploadedImage> {
        let data = tokio::fs::read(file_path)
            .await
            .map_err(|e| Error::io_with_source("failed to read upload file", e))?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let transformation = Self::transform_string(transform);
        let signed_params = [
            ("folder", folder.to_string()),
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.clone()),
            ("transformation", transformation.clone()),
        ];
        let signature = self.sign(&signed_params);

        let form = Form::new()
            .part("file", Part::bytes(data).file_name(file_name))
            .text("api_key", self.api_key.clone())
            .text("folder", folder.to_string())
            .text("public_id", public_id.to_string())
            .text("timestamp", timestamp)
            .text("transformation", transformation)
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .http_client
            .post(self.endpoint("upload"))
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let value = HttpResponseUtils::check_and_parse(response, "cloudinary").await?;
        Self::parse_upload_response(&value)
    }

    async fn destroy(&self, public_id: &str) -> Result<()> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signed_params = [
            ("invalidate", "true".to_string()),
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.clone()),
        ];
        let signature = self.sign(&signed_params);

        let form = [
            ("api_key", self.api_key.clone()),
            ("invalidate", "true".to_string()),
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp),
            ("signature_algorithm", "sha256".to_string()),
            ("signature", signature),
        ];

        let response = self
            .http_client
            .post(self.endpoint("destroy"))
            .timeout(self.timeout)
            .form(&form)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        HttpResponseUtils::check_and_parse(response, "cloudinary").await?;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "cloudinary"
    }
}
