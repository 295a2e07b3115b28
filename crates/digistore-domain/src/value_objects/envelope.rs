//! Uniform response envelope

use serde::{Deserialize, Serialize};

/// Value Object: Response Envelope
///
/// Every product service operation resolves to this shape; the inbound
/// boundary serializes it as-is. Failures never reach the envelope, they
/// propagate as [`crate::Error`] for the boundary to translate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable outcome description
    pub message: String,
    /// Always true for envelopes produced by the service
    pub success: bool,
    /// Operation payload, if any
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope carrying `result`
    pub fn ok<S: Into<String>>(message: S, result: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            result: Some(result),
        }
    }

    /// Build a success envelope with no payload
    pub fn ok_empty<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            success: true,
            result: None,
        }
    }
}
