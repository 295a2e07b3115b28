//! Configuration
//!
//! Typed configuration sections plus the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LedgerConfig, LoggingConfig, MediaConfig, StoreConfig};
