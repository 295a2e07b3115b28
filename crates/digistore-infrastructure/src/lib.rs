//! Infrastructure layer for the Digistore backend
//!
//! Everything that sits outside the business rules: configuration
//! loading (figment: defaults, TOML file, environment), structured
//! logging with the tracing ecosystem, error context utilities, and the
//! bootstrap factory that wires a [`ProductService`] from configuration.
//!
//! [`ProductService`]: digistore_application::ProductService

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::build_product_service;
pub use config::{AppConfig, ConfigLoader};
