//! SKU lifecycle
//!
//! Ledger prices are append-only: batch creation mints one price per
//! entry lacking a reference, a price change mints a replacement and
//! leaves the superseded record active, and only the deletion path
//! deactivates a price.

use std::collections::BTreeMap;

use tracing::info;

use digistore_domain::constants::MINOR_UNITS_PER_MAJOR;
use digistore_domain::entities::{Product, Sku};
use digistore_domain::error::{Error, Result};
use digistore_domain::id::{new_id, sku_batch_code};
use digistore_domain::value_objects::{ApiResponse, LedgerPriceSpec, SkuInput, SkuPatch};

use crate::constants::{MSG_SKUS_ADDED, MSG_SKU_DELETED, MSG_SKU_UPDATED};

use super::ProductService;

fn price_metadata(
    product: &Product,
    sku_id: &str,
    sku_code: &str,
    price: u64,
    lifetime: bool,
) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    metadata.insert("skuCode".to_string(), sku_code.to_string());
    metadata.insert("lifetime".to_string(), lifetime.to_string());
    metadata.insert("productId".to_string(), product.id.clone());
    metadata.insert("skuId".to_string(), sku_id.to_string());
    metadata.insert("price".to_string(), price.to_string());
    metadata.insert("productName".to_string(), product.product_name.clone());
    metadata.insert(
        "productImage".to_string(),
        product.image.clone().unwrap_or_default(),
    );
    metadata
}

impl ProductService {
    fn ledger_product_id(product: &Product) -> Result<String> {
        product.stripe_product_id.clone().ok_or_else(|| {
            Error::validation(format!(
                "Product {} has no payment ledger record",
                product.id
            ))
        })
    }

    /// Append a batch of SKUs to a product
    ///
    /// One shared code is generated for the whole batch and assigned to
    /// every entry, whether or not it already carried a ledger price.
    /// Entries without a ledger price get one minted, sequentially.
    pub async fn add_product_skus(
        &self,
        product_id: &str,
        batch: Vec<SkuInput>,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;
        let sku_code = sku_batch_code();

        let mut skus = Vec::with_capacity(batch.len());
        for input in batch {
            let sku_id = new_id();
            let stripe_price_id = match input.stripe_price_id {
                Some(existing) => Some(existing),
                None => {
                    let spec = LedgerPriceSpec {
                        ledger_product_id: Self::ledger_product_id(&product)?,
                        unit_amount_minor: input.price * MINOR_UNITS_PER_MAJOR,
                        currency: self.settings.currency.clone(),
                        metadata: price_metadata(
                            &product, &sku_id, &sku_code, input.price, input.lifetime,
                        ),
                    };
                    Some(self.ledger.create_price(&spec).await?)
                }
            };
            skus.push(Sku {
                id: sku_id,
                price: input.price,
                lifetime: input.lifetime,
                stripe_price_id,
                sku_code: sku_code.clone(),
            });
        }

        let added = skus.len();
        let updated = self
            .products
            .push_skus(product_id, skus)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {product_id}")))?;

        info!(product_id, added, %sku_code, "sku batch appended");
        Ok(ApiResponse::ok(MSG_SKUS_ADDED, updated))
    }

    /// Patch one embedded SKU
    ///
    /// A changed price mints a new ledger price carrying the existing SKU
    /// code; the previous ledger price stays active.
    pub async fn update_product_sku(
        &self,
        product_id: &str,
        sku_id: &str,
        mut patch: SkuPatch,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;
        let sku = product
            .sku(sku_id)
            .ok_or_else(|| Error::not_found(format!("Sku {sku_id}")))?;

        if let Some(new_price) = patch.price {
            if new_price != sku.price {
                let lifetime = patch.lifetime.unwrap_or(sku.lifetime);
                let spec = LedgerPriceSpec {
                    ledger_product_id: Self::ledger_product_id(&product)?,
                    unit_amount_minor: new_price * MINOR_UNITS_PER_MAJOR,
                    currency: self.settings.currency.clone(),
                    metadata: price_metadata(&product, sku_id, &sku.sku_code, new_price, lifetime),
                };
                patch.stripe_price_id = Some(self.ledger.create_price(&spec).await?);
            }
        }

        let updated = self
            .products
            .update_sku(product_id, sku_id, &patch)
            .await?
            .ok_or_else(|| Error::not_found(format!("Sku {sku_id}")))?;

        info!(product_id, sku_id, "sku updated");
        Ok(ApiResponse::ok(MSG_SKU_UPDATED, updated))
    }

    /// Delete one embedded SKU
    ///
    /// Deactivates the ledger price, removes the sub-document, then
    /// cascades license deletion scoped by this product AND this SKU.
    pub async fn delete_product_sku(
        &self,
        product_id: &str,
        sku_id: &str,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;
        let sku = product
            .sku(sku_id)
            .ok_or_else(|| Error::not_found(format!("Sku {sku_id}")))?;

        if let Some(price_id) = sku.stripe_price_id.as_deref() {
            self.ledger.deactivate_price(price_id).await?;
        }

        let updated = self
            .products
            .pull_sku(product_id, sku_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Sku {sku_id}")))?;

        let removed_licenses = self
            .licenses
            .delete_by_product_and_sku(product_id, sku_id)
            .await?;

        info!(product_id, sku_id, removed_licenses, "sku deleted");
        Ok(ApiResponse::ok(MSG_SKU_DELETED, updated))
    }
}
