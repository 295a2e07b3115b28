//! Repository ports
//!
//! Contracts for the document store. The store serializes its own writes;
//! combined mutations (feedback push + average set, sub-document patch)
//! are single store updates and therefore atomic per document, everything
//! across documents or across systems is not.

use async_trait::async_trait;

use crate::entities::{Feedback, ImageDetails, License, Order, Product, Sku};
use crate::error::Result;
use crate::value_objects::{CategoryGroup, ProductFilter, ProductPatch, SkuPatch};

/// Product collection access
///
/// Methods returning `Option<Product>` yield `None` when no document
/// matches, mirroring the store's `null` results; the service layer turns
/// those into NotFound errors.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product document
    async fn create(&self, product: Product) -> Result<Product>;

    /// Fetch one product by id
    async fn find_one(&self, id: &str) -> Result<Option<Product>>;

    /// Fetch products matching `filter` with skip/limit applied,
    /// newest first
    async fn find(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Product>>;

    /// Count products matching `filter`
    async fn count(&self, filter: &ProductFilter) -> Result<u64>;

    /// Grouped homepage query: latest `per_category` products per category
    async fn find_grouped_by_category(&self, per_category: usize) -> Result<Vec<CategoryGroup>>;

    /// Products sharing `category`, excluding `exclude_id`
    async fn find_related(&self, category: &str, exclude_id: &str) -> Result<Vec<Product>>;

    /// Apply a field patch, returning the updated document
    async fn update_one(&self, id: &str, patch: &ProductPatch) -> Result<Option<Product>>;

    /// Delete one product, returning the removed document
    async fn delete_one(&self, id: &str) -> Result<Option<Product>>;

    /// Append a SKU batch to the product's SKU array
    async fn push_skus(&self, product_id: &str, skus: Vec<Sku>) -> Result<Option<Product>>;

    /// Patch the matching embedded SKU in place (positional update)
    async fn update_sku(
        &self,
        product_id: &str,
        sku_id: &str,
        patch: &SkuPatch,
    ) -> Result<Option<Product>>;

    /// Remove the matching embedded SKU
    async fn pull_sku(&self, product_id: &str, sku_id: &str) -> Result<Option<Product>>;

    /// Replace the product's image URL and host metadata
    async fn set_image(
        &self,
        product_id: &str,
        url: &str,
        details: &ImageDetails,
    ) -> Result<Option<Product>>;

    /// Push a feedback entry and set the new average in one update
    ///
    /// The store enforces at most one feedback per customer per product:
    /// a duplicate insert fails with a Validation error without touching
    /// the document.
    async fn push_feedback(
        &self,
        product_id: &str,
        feedback: Feedback,
        new_avg: &str,
    ) -> Result<Option<Product>>;

    /// Pull a feedback entry and set the new average in one update
    async fn pull_feedback(
        &self,
        product_id: &str,
        feedback_id: &str,
        new_avg: &str,
    ) -> Result<Option<Product>>;

    /// Flag or clear the product's pending ledger sync marker
    async fn set_ledger_sync_pending(&self, product_id: &str, pending: bool) -> Result<()>;
}

/// Order collection access (read-only here)
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch one order linking `customer_id` to `product_id`, if any
    async fn find_by_customer_and_product(
        &self,
        customer_id: &str,
        product_id: &str,
    ) -> Result<Option<Order>>;
}

/// License collection access
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// Persist a new license
    async fn create(&self, license: License) -> Result<License>;

    /// All licenses issued for the given product/SKU pair
    async fn find_by_product_and_sku(&self, product_id: &str, sku_id: &str)
        -> Result<Vec<License>>;

    /// Delete one license by id, returning the number of deleted records
    /// (0 when absent, which is not an error)
    async fn delete_by_id(&self, id: &str) -> Result<u64>;

    /// Cascade delete scoped by product AND SKU, returning the count
    async fn delete_by_product_and_sku(&self, product_id: &str, sku_id: &str) -> Result<u64>;

    /// Replace a license's key by the license's own id
    async fn update_key(&self, license_id: &str, new_key: &str) -> Result<Option<License>>;
}
