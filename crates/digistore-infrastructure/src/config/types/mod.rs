//! Configuration types

mod app;
mod logging;
mod providers;
mod store;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use providers::{LedgerConfig, MediaConfig};
pub use store::StoreConfig;
