//! License entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issued license key tied to a specific SKU
///
/// The back-references are not ownership: a license lives in its own
/// collection and only participates in the SKU lifecycle through the
/// cascade delete scoped by product and SKU id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Unique identifier of the license
    pub id: String,
    /// Product the owning SKU belongs to
    pub product_id: String,
    /// SKU this key was issued for
    pub sku_id: String,
    /// Opaque license key string
    pub license_key: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl License {
    /// Create a new license for the given product/SKU pair
    pub fn new<S: Into<String>>(product_id: S, sku_id: S, license_key: S) -> Self {
        Self {
            id: crate::id::new_id(),
            product_id: product_id.into(),
            sku_id: sku_id.into(),
            license_key: license_key.into(),
            created_at: Utc::now(),
        }
    }
}
