//! Service wiring
//!
//! Builds a ready-to-use [`ProductService`] from an [`AppConfig`]:
//! in-memory repositories, real provider clients when credentials are
//! configured, null providers otherwise.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use digistore_application::{ProductService, ServiceSettings};
use digistore_domain::Result;
use digistore_domain::ports::{MediaHostProvider, PaymentLedgerProvider};
use digistore_domain::value_objects::ImageTransform;
use digistore_providers::media_host::{CloudinaryMediaProvider, NullMediaHostProvider};
use digistore_providers::payment_ledger::{NullPaymentLedgerProvider, StripeLedgerProvider};
use digistore_providers::repositories::{
    InMemoryLicenseRepository, InMemoryOrderRepository, InMemoryProductRepository,
};

use crate::config::AppConfig;
use crate::error_ext::ErrorContext;

/// Build a fully wired product service from configuration
pub fn build_product_service(config: &AppConfig) -> Result<ProductService> {
    let products = Arc::new(InMemoryProductRepository::new());
    let orders = Arc::new(InMemoryOrderRepository::new());
    let licenses = Arc::new(InMemoryLicenseRepository::new());

    let ledger = build_ledger_provider(config)?;
    let media = build_media_provider(config)?;

    let settings = ServiceSettings {
        currency: config.ledger.currency.clone(),
        media_folder: config.media.folder.clone(),
        public_id_prefix: config.media.public_id_prefix.clone(),
        image_transform: ImageTransform {
            width: config.media.image_width,
            height: config.media.image_height,
        },
    };

    Ok(ProductService::new(
        products, orders, licenses, ledger, media, settings,
    ))
}

/// Select the payment ledger provider from configuration
///
/// A configured API key wires the Stripe client; otherwise the null
/// provider stands in so the service stays usable in development.
fn build_ledger_provider(config: &AppConfig) -> Result<Arc<dyn PaymentLedgerProvider>> {
    match &config.ledger.api_key {
        Some(api_key) => {
            let timeout = Duration::from_secs(config.ledger.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build ledger HTTP client")?;
            info!(provider = "stripe", "Payment ledger provider configured");
            Ok(Arc::new(StripeLedgerProvider::new(
                api_key.clone(),
                config.ledger.base_url.clone(),
                timeout,
                http_client,
            )))
        }
        None => {
            info!(provider = "null", "No ledger API key, using null provider");
            Ok(Arc::new(NullPaymentLedgerProvider::new()))
        }
    }
}

/// Select the media host provider from configuration
fn build_media_provider(config: &AppConfig) -> Result<Arc<dyn MediaHostProvider>> {
    if config.media.has_account() {
        let timeout = Duration::from_secs(config.media.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build media HTTP client")?;
        info!(provider = "cloudinary", "Media host provider configured");
        // has_account() guarantees all three fields are present
        let cloud_name = config.media.cloud_name.clone().unwrap_or_default();
        let api_key = config.media.api_key.clone().unwrap_or_default();
        let api_secret = config.media.api_secret.clone().unwrap_or_default();
        Ok(Arc::new(CloudinaryMediaProvider::new(
            cloud_name, api_key, api_secret, timeout, http_client,
        )))
    } else {
        info!(provider = "null", "No media credentials, using null provider");
        Ok(Arc::new(NullMediaHostProvider::new()))
    }
}
