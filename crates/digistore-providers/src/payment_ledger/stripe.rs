//! Stripe Payment Ledger Provider
//!
//! Implements the PaymentLedgerProvider port against the Stripe v1 API.
//! Product and price records are mirrored 1:1 with local products/SKUs;
//! prices are append-only and only ever deactivated, never deleted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use digistore_domain::error::{Error, Result};
use digistore_domain::ports::PaymentLedgerProvider;
use digistore_domain::value_objects::LedgerPriceSpec;

use crate::constants::{ERROR_MSG_REQUEST_TIMEOUT, STRIPE_DEFAULT_BASE_URL};
use crate::utils::HttpResponseUtils;

/// Stripe payment ledger provider
///
/// Implements the `PaymentLedgerProvider` domain port against Stripe's
/// form-encoded v1 API. Receives the HTTP client via constructor
/// injection.
pub struct StripeLedgerProvider {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl StripeLedgerProvider {
    /// Create a new Stripe ledger provider
    ///
    /// # Arguments
    /// * `api_key` - Stripe secret key
    /// * `base_url` - Optional custom base URL (defaults to the Stripe API)
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(STRIPE_DEFAULT_BASE_URL)
    }

    fn map_request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::payment_ledger(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
        } else {
            Error::payment_ledger_with_source("HTTP request failed", e)
        }
    }

    /// POST a form-encoded request and parse the JSON response
    async fn post_form(&self, path: &str, form: &[(String, String)]) -> Result<serde_json::Value> {
        let response = self
            .http_client
            .post(format!("{}{path}", self.base_url()))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .form(form)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        HttpResponseUtils::check_and_parse(response, "stripe").await
    }

    /// Extract the record id from a Stripe response
    fn record_id(value: &serde_json::Value, context: &str) -> Result<String> {
        value["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::payment_ledger(format!("{context}: response carries no id")))
    }
}

#[async_trait]
impl PaymentLedgerProvider for StripeLedgerProvider {
    async fn create_product(&self, name: &str, description: &str) -> Result<String> {
        let form = vec![
            ("name".to_string(), name.to_string()),
            ("description".to_string(), description.to_string()),
        ];
        let response = self.post_form("/products", &form).await?;
        Self::record_id(&response, "product create")
    }

    async fn update_product(
        &self,
        ledger_product_id: &str,
        name: &str,
        description: &str,
    ) -> Result<()> {
        let form = vec![
            ("name".to_string(), name.to_string()),
            ("description".to_string(), description.to_string()),
        ];
        self.post_form(&format!("/products/{ledger_product_id}"), &form)
            .await?;
        Ok(())
    }

    async fn delete_product(&self, ledger_product_id: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(format!("{}/products/{ledger_product_id}", self.base_url()))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        HttpResponseUtils::check_and_parse(response, "stripe").await?;
        Ok(())
    }

    async fn set_product_images(&self, ledger_product_id: &str, urls: &[String]) -> Result<()> {
        let form: Vec<(String, String)> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| (format!("images[{i}]"), url.clone()))
            .collect();
        self.post_form(&format!("/products/{ledger_product_id}"), &form)
            .await?;
        Ok(())
    }

    async fn create_price(&self, spec: &LedgerPriceSpec) -> Result<String> {
        let mut form = vec![
            ("product".to_string(), spec.ledger_product_id.clone()),
            (
                "unit_amount".to_string(),
                spec.unit_amount_minor.to_string(),
            ),
            ("currency".to_string(), spec.currency.clone()),
        ];
        for (key, value) in &spec.metadata {
            form.push((format!("metadata[{key}]"), value.clone()));
        }

        let response = self.post_form("/prices", &form).await?;
        Self::record_id(&response, "price create")
    }

    async fn deactivate_price(&self, ledger_price_id: &str) -> Result<()> {
        let form = vec![("active".to_string(), "false".to_string())];
        self.post_form(&format!("/prices/{ledger_price_id}"), &form)
            .await?;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "stripe"
    }
}
