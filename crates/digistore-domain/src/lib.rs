//! Domain layer for the Digistore backend
//!
//! Core business types for the digital product catalog: products with their
//! embedded SKUs and customer feedback, license-key inventory, and the port
//! contracts implemented by the provider and infrastructure layers.
//!
//! This crate has no I/O of its own. Repositories and external collaborators
//! (payment ledger, media host) are expressed as async port traits that the
//! outer layers implement.

pub mod constants;
pub mod entities;
pub mod error;
pub mod id;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
