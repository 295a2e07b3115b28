//! Image host value objects

use serde::{Deserialize, Serialize};

use crate::entities::ImageDetails;

/// Fixed transform applied to every uploaded product image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTransform {
    /// Bounding box width in pixels
    pub width: u32,
    /// Bounding box height in pixels
    pub height: u32,
}

/// Result of a successful image upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Secure URL of the stored asset
    pub secure_url: String,
    /// Host-side metadata, persisted alongside the URL
    pub details: ImageDetails,
}
