//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the external API
//! providers. These are shared utilities, not ports.

use digistore_domain::error::{Error, Result};
use reqwest::Response;

/// Build the provider-specific error for a failed call
fn provider_error(provider: &str, context: &str, details: &str) -> Error {
    let message = format!("{provider} {context}: {details}");
    match provider {
        "stripe" => Error::payment_ledger(message),
        "cloudinary" => Error::media_host(message),
        _ => Error::internal(message),
    }
}

/// Utilities for processing HTTP responses
///
/// Provides the response handling pattern shared by the ledger and media
/// host clients.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error classification
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => provider_error(provider_name, "authentication failed", &error_text),
                429 => provider_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => provider_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => provider_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| provider_error(provider_name, "response parse failed", &e.to_string()))
    }
}
