//! Null payment ledger provider for testing and development
//!
//! Mints deterministic-looking ledger ids without any network traffic.

use async_trait::async_trait;

use digistore_domain::error::Result;
use digistore_domain::id::short_token;
use digistore_domain::ports::PaymentLedgerProvider;
use digistore_domain::value_objects::LedgerPriceSpec;

/// Null payment ledger provider
///
/// Every call succeeds; create operations return locally generated ids
/// with the familiar `prod_`/`price_` prefixes. Useful for unit tests
/// and development without a ledger account.
pub struct NullPaymentLedgerProvider;

impl NullPaymentLedgerProvider {
    /// Create a new null ledger provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullPaymentLedgerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentLedgerProvider for NullPaymentLedgerProvider {
    async fn create_product(&self, _name: &str, _description: &str) -> Result<String> {
        Ok(format!("prod_{}", short_token(14)))
    }

    async fn update_product(
        &self,
        _ledger_product_id: &str,
        _name: &str,
        _description: &str,
    ) -> Result<()> {
        Ok(())
    }

    async fn delete_product(&self, _ledger_product_id: &str) -> Result<()> {
        Ok(())
    }

    async fn set_product_images(&self, _ledger_product_id: &str, _urls: &[String]) -> Result<()> {
        Ok(())
    }

    async fn create_price(&self, _spec: &LedgerPriceSpec) -> Result<String> {
        Ok(format!("price_{}", short_token(14)))
    }

    async fn deactivate_price(&self, _ledger_price_id: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
