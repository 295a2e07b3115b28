//! Main application configuration

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::providers::{LedgerConfig, MediaConfig};
use super::store::StoreConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Payment ledger configuration
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Media host configuration
    #[serde(default)]
    pub media: MediaConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
