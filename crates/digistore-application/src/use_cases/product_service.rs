//! Product service wiring and the product CRUD/listing operations
//!
//! Call ordering per operation is part of the contract: creation talks to
//! the ledger before the store (no local record without a ledger record),
//! deletion removes the local record first and then the ledger mirror.
//! Nothing here is transactional across systems; a ledger failure after a
//! committed local write marks the product with `ledger_sync_pending`
//! instead of leaving silent inconsistency.

use std::sync::Arc;

use tracing::{debug, info, warn};

use digistore_domain::constants::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SKIP, HOMEPAGE_GROUP_LIMIT};
use digistore_domain::entities::Product;
use digistore_domain::error::{Error, Result};
use digistore_domain::ports::{
    LicenseRepository, MediaHostProvider, OrderRepository, PaymentLedgerProvider,
    ProductRepository,
};
use digistore_domain::value_objects::{
    ApiResponse, CreateProductInput, ImageTransform, ProductDetail, ProductListing, ProductPatch,
    ProductQuery,
};

use crate::constants::*;
use crate::pagination::page_metadata;

/// Fixed settings the service needs beyond its collaborators
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// ISO currency code for minted ledger prices
    pub currency: String,
    /// Image host folder for product images
    pub media_folder: String,
    /// Prefix for generated media public ids
    pub public_id_prefix: String,
    /// Transform box applied to every uploaded image
    pub image_transform: ImageTransform,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            currency: "usd".to_string(),
            media_folder: "digistore/products".to_string(),
            public_id_prefix: "digistore_".to_string(),
            image_transform: ImageTransform {
                width: 600,
                height: 600,
            },
        }
    }
}

/// Product service - the orchestrator for the catalog module
///
/// Each operation is an independent sequential unit of work: repository
/// and provider calls are awaited one at a time, never raced against each
/// other, and errors propagate unchanged apart from the two distinguished
/// client-error cases (duplicate review, unpurchased review).
pub struct ProductService {
    pub(crate) products: Arc<dyn ProductRepository>,
    pub(crate) orders: Arc<dyn OrderRepository>,
    pub(crate) licenses: Arc<dyn LicenseRepository>,
    pub(crate) ledger: Arc<dyn PaymentLedgerProvider>,
    pub(crate) media: Arc<dyn MediaHostProvider>,
    pub(crate) settings: ServiceSettings,
}

impl ProductService {
    /// Create a new product service with injected collaborators
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        licenses: Arc<dyn LicenseRepository>,
        ledger: Arc<dyn PaymentLedgerProvider>,
        media: Arc<dyn MediaHostProvider>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            products,
            orders,
            licenses,
            ledger,
            media,
            settings,
        }
    }

    /// Fetch a product or fail with NotFound
    pub(crate) async fn require_product(&self, id: &str) -> Result<Product> {
        self.products
            .find_one(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {id}")))
    }

    /// Record the outcome of a ledger call that followed a committed local
    /// write: mark the product pending on failure, clear a stale marker on
    /// success
    pub(crate) async fn settle_ledger_result(
        &self,
        product: &Product,
        outcome: Result<()>,
    ) -> Result<()> {
        match outcome {
            Ok(()) => {
                if product.ledger_sync_pending {
                    self.products
                        .set_ledger_sync_pending(&product.id, false)
                        .await?;
                }
                Ok(())
            }
            Err(err) => {
                if let Err(mark_err) = self
                    .products
                    .set_ledger_sync_pending(&product.id, true)
                    .await
                {
                    warn!(
                        product_id = %product.id,
                        error = %mark_err,
                        "failed to mark product as pending ledger sync"
                    );
                }
                Err(err)
            }
        }
    }

    /// Create a product, mirroring it into the payment ledger
    ///
    /// When the input carries no ledger reference the ledger record is
    /// created first; a ledger failure therefore leaves no local record.
    /// The reverse failure (local write after ledger creation) leaves an
    /// orphan ledger record, which is accepted.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ApiResponse<Product>> {
        let ledger_product_id = match input.stripe_product_id.clone() {
            Some(id) => id,
            None => {
                self.ledger
                    .create_product(&input.product_name, &input.description)
                    .await?
            }
        };

        let mut product = Product::new(input.product_name, input.description, input.category);
        product.stripe_product_id = Some(ledger_product_id);

        let product = self.products.create(product).await?;
        info!(product_id = %product.id, "product created");
        Ok(ApiResponse::ok(MSG_PRODUCT_CREATED, product))
    }

    /// List products: grouped homepage mode or filtered search mode
    pub async fn find_products(&self, query: ProductQuery) -> Result<ApiResponse<ProductListing>> {
        if query.homepage {
            let groups = self
                .products
                .find_grouped_by_category(HOMEPAGE_GROUP_LIMIT)
                .await?;
            return Ok(ApiResponse::ok(
                MSG_PRODUCTS_FETCHED,
                ProductListing::Grouped(groups),
            ));
        }

        let (filter, skip, limit) = query.into_filter();
        let skip = skip.unwrap_or(DEFAULT_LIST_SKIP);
        let limit = Some(limit.unwrap_or(DEFAULT_LIST_LIMIT));
        debug!(?filter, skip, ?limit, "translated product listing query");

        let products = self.products.find(&filter, skip, limit).await?;
        let total = self.products.count(&filter).await?;
        let metadata = page_metadata(skip, limit, total, PRODUCTS_BASE_PATH);

        Ok(ApiResponse::ok(
            MSG_PRODUCTS_FETCHED,
            ProductListing::Page { products, metadata },
        ))
    }

    /// Fetch one product plus its unranked same-category siblings
    pub async fn find_product(&self, id: &str) -> Result<ApiResponse<ProductDetail>> {
        let product = self.require_product(id).await?;
        let related_products = self
            .products
            .find_related(&product.category, &product.id)
            .await?;

        Ok(ApiResponse::ok(
            MSG_PRODUCT_FETCHED,
            ProductDetail {
                product,
                related_products,
            },
        ))
    }

    /// Patch a product, pushing name/description to the ledger unless the
    /// caller is setting the ledger reference directly
    pub async fn update_product(
        &self,
        id: &str,
        patch: ProductPatch,
    ) -> Result<ApiResponse<Product>> {
        self.require_product(id).await?;

        let sync_ledger = !patch.sets_ledger_reference();
        let updated = self
            .products
            .update_one(id, &patch)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {id}")))?;

        if sync_ledger {
            if let Some(ledger_id) = updated.stripe_product_id.clone() {
                let outcome = self
                    .ledger
                    .update_product(&ledger_id, &updated.product_name, &updated.description)
                    .await;
                self.settle_ledger_result(&updated, outcome).await?;
            }
        }

        info!(product_id = %id, "product updated");
        Ok(ApiResponse::ok(MSG_PRODUCT_UPDATED, updated))
    }

    /// Delete a product locally, then delete its ledger mirror
    ///
    /// No rollback if the ledger deletion fails after the local deletion
    /// succeeded; the error surfaces as the operation's result.
    pub async fn delete_product(&self, id: &str) -> Result<ApiResponse<Product>> {
        let deleted = self
            .products
            .delete_one(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {id}")))?;

        if let Some(ledger_id) = deleted.stripe_product_id.as_deref() {
            self.ledger.delete_product(ledger_id).await?;
        }

        info!(product_id = %id, "product deleted");
        Ok(ApiResponse::ok(MSG_PRODUCT_DELETED, deleted))
    }
}
