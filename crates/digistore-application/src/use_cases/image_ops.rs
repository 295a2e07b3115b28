//! Image pipeline
//!
//! Ordering contract: destroy the previous host asset (best-effort),
//! upload the new file with the fixed transform, delete the local temp
//! file unconditionally, persist URL + metadata, then overwrite the
//! ledger product's image list with the single new URL.

use std::path::Path;

use tracing::{info, warn};

use digistore_domain::entities::Product;
use digistore_domain::error::{Error, Result};
use digistore_domain::id::short_token;
use digistore_domain::value_objects::ApiResponse;

use crate::constants::MSG_IMAGE_UPLOADED;

use super::ProductService;

/// Length of the random part of a generated media public id
const PUBLIC_ID_TOKEN_LEN: usize = 16;

impl ProductService {
    /// Upload a product image from a local temporary file
    pub async fn upload_product_image(
        &self,
        product_id: &str,
        file_path: &Path,
    ) -> Result<ApiResponse<Product>> {
        let product = self.require_product(product_id).await?;

        // Best-effort destroy of the previous asset; the upload proceeds
        // whether or not the old public id was actually removed
        if let Some(details) = &product.image_details {
            if let Err(err) = self.media.destroy(&details.public_id).await {
                warn!(
                    product_id,
                    public_id = %details.public_id,
                    error = %err,
                    "failed to destroy previous product image"
                );
            }
        }

        let public_id = format!(
            "{}{}",
            self.settings.public_id_prefix,
            short_token(PUBLIC_ID_TOKEN_LEN)
        );
        let uploaded = self
            .media
            .upload(
                file_path,
                &self.settings.media_folder,
                &public_id,
                self.settings.image_transform,
            )
            .await?;

        // The temp file is gone after this point even if the store or
        // ledger update below fails
        if let Err(err) = tokio::fs::remove_file(file_path).await {
            warn!(path = %file_path.display(), error = %err, "failed to remove temp upload file");
        }

        let updated = self
            .products
            .set_image(product_id, &uploaded.secure_url, &uploaded.details)
            .await?
            .ok_or_else(|| Error::not_found(format!("Product {product_id}")))?;

        if let Some(ledger_id) = updated.stripe_product_id.clone() {
            let outcome = self
                .ledger
                .set_product_images(&ledger_id, std::slice::from_ref(&uploaded.secure_url))
                .await;
            self.settle_ledger_result(&updated, outcome).await?;
        }

        info!(product_id, public_id = %uploaded.details.public_id, "product image uploaded");
        Ok(ApiResponse::ok(MSG_IMAGE_UPLOADED, updated))
    }
}
