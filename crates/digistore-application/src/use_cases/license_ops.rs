//! License-key inventory

use tracing::info;

use digistore_domain::entities::{License, Product};
use digistore_domain::error::{Error, Result};
use digistore_domain::value_objects::ApiResponse;

use crate::constants::{
    MSG_LICENSES_FETCHED, MSG_LICENSE_ADDED, MSG_LICENSE_REMOVED, MSG_LICENSE_UPDATED,
};

use super::ProductService;

impl ProductService {
    /// Fetch the product and verify the SKU exists on it
    async fn require_product_and_sku(&self, product_id: &str, sku_id: &str) -> Result<Product> {
        let product = self.require_product(product_id).await?;
        if product.sku(sku_id).is_none() {
            return Err(Error::not_found(format!("Sku {sku_id}")));
        }
        Ok(product)
    }

    /// Add a license key to a SKU's inventory
    pub async fn add_product_sku_license(
        &self,
        product_id: &str,
        sku_id: &str,
        license_key: &str,
    ) -> Result<ApiResponse<License>> {
        self.require_product_and_sku(product_id, sku_id).await?;

        let license = self
            .licenses
            .create(License::new(product_id, sku_id, license_key))
            .await?;

        info!(product_id, sku_id, license_id = %license.id, "license added");
        Ok(ApiResponse::ok(MSG_LICENSE_ADDED, license))
    }

    /// Remove a license by its own id
    ///
    /// Deleting an absent license is a no-op reporting zero deletions,
    /// not an error.
    pub async fn remove_product_sku_license(&self, license_id: &str) -> Result<ApiResponse<u64>> {
        let deleted = self.licenses.delete_by_id(license_id).await?;
        info!(license_id, deleted, "license removed");
        Ok(ApiResponse::ok(MSG_LICENSE_REMOVED, deleted))
    }

    /// All licenses issued for the given product/SKU pair
    pub async fn get_product_sku_licenses(
        &self,
        product_id: &str,
        sku_id: &str,
    ) -> Result<ApiResponse<Vec<License>>> {
        self.require_product_and_sku(product_id, sku_id).await?;

        let licenses = self
            .licenses
            .find_by_product_and_sku(product_id, sku_id)
            .await?;
        Ok(ApiResponse::ok(MSG_LICENSES_FETCHED, licenses))
    }

    /// Replace a license's key
    ///
    /// Product and SKU existence are validated, but the update itself
    /// targets the license by its own id only.
    pub async fn update_product_sku_license(
        &self,
        product_id: &str,
        sku_id: &str,
        license_id: &str,
        new_key: &str,
    ) -> Result<ApiResponse<License>> {
        self.require_product_and_sku(product_id, sku_id).await?;

        let license = self
            .licenses
            .update_key(license_id, new_key)
            .await?
            .ok_or_else(|| Error::not_found(format!("License {license_id}")))?;

        info!(product_id, sku_id, license_id, "license key updated");
        Ok(ApiResponse::ok(MSG_LICENSE_UPDATED, license))
    }
}
