//! Provider constants

/// Default base URL for the Stripe API
pub const STRIPE_DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Base URL template for the Cloudinary API (`{}` is the cloud name)
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Default timeout for provider HTTP requests, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";
