//! External provider ports
//!
//! Contracts for the two external collaborators the product service
//! sequences: the payment ledger (product and price records mirrored 1:1
//! with local products/SKUs) and the image host. Calls are synchronous
//! HTTP operations per the collaborators' contracts; any failure
//! propagates unchanged, there are no retries at this layer.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ImageTransform, LedgerPriceSpec, UploadedImage};

/// Payment ledger port
#[async_trait]
pub trait PaymentLedgerProvider: Send + Sync {
    /// Create a ledger product, returning its ledger id
    async fn create_product(&self, name: &str, description: &str) -> Result<String>;

    /// Push name/description to an existing ledger product
    async fn update_product(
        &self,
        ledger_product_id: &str,
        name: &str,
        description: &str,
    ) -> Result<()>;

    /// Delete a ledger product
    async fn delete_product(&self, ledger_product_id: &str) -> Result<()>;

    /// Replace the ledger product's image list
    async fn set_product_images(&self, ledger_product_id: &str, urls: &[String]) -> Result<()>;

    /// Mint a new price record, returning its ledger id
    ///
    /// Prices are append-only; there is no update counterpart.
    async fn create_price(&self, spec: &LedgerPriceSpec) -> Result<String>;

    /// Mark a price inactive (never deleted)
    async fn deactivate_price(&self, ledger_price_id: &str) -> Result<()>;

    /// Identifier of this provider implementation (e.g. "stripe", "null")
    fn provider_name(&self) -> &str;
}

/// Image host port
#[async_trait]
pub trait MediaHostProvider: Send + Sync {
    /// Upload a local file under `folder` with the given public id,
    /// applying the fixed transform pipeline
    async fn upload(
        &self,
        file_path: &Path,
        folder: &str,
        public_id: &str,
        transform: ImageTransform,
    ) -> Result<UploadedImage>;

    /// Destroy a hosted asset by public id, invalidating cached copies
    async fn destroy(&self, public_id: &str) -> Result<()>;

    /// Identifier of this provider implementation (e.g. "cloudinary", "null")
    fn provider_name(&self) -> &str;
}
