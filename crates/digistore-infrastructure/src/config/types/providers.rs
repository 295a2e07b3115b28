//! External provider configuration

use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "usd".to_string()
}

fn default_timeout_secs() -> u64 {
    digistore_providers::constants::DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_media_folder() -> String {
    "digistore/products".to_string()
}

fn default_public_id_prefix() -> String {
    "digistore_".to_string()
}

fn default_image_box() -> u32 {
    600
}

/// Payment ledger configuration
///
/// Without an API key the bootstrap wires the null ledger provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Ledger secret API key
    pub api_key: Option<String>,
    /// Custom base URL (test servers, proxies)
    pub base_url: Option<String>,
    /// ISO currency code for minted prices
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            currency: default_currency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Media host configuration
///
/// The three account fields come as a set; without them the bootstrap
/// wires the null media provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Media host cloud name
    pub cloud_name: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// API secret used for request signing
    pub api_secret: Option<String>,
    /// Folder product images are uploaded under
    #[serde(default = "default_media_folder")]
    pub folder: String,
    /// Prefix for generated public ids
    #[serde(default = "default_public_id_prefix")]
    pub public_id_prefix: String,
    /// Transform box width in pixels
    #[serde(default = "default_image_box")]
    pub image_width: u32,
    /// Transform box height in pixels
    #[serde(default = "default_image_box")]
    pub image_height: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MediaConfig {
    /// Whether a complete media host account is configured
    pub fn has_account(&self) -> bool {
        self.cloud_name.is_some() && self.api_key.is_some() && self.api_secret.is_some()
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            folder: default_media_folder(),
            public_id_prefix: default_public_id_prefix(),
            image_width: default_image_box(),
            image_height: default_image_box(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
