//! Application Layer - Digistore backend
//!
//! Implements the product service use case: the orchestrator that enforces
//! the product/SKU/license/review lifecycle, sequences the document store
//! and the two external collaborators (payment ledger, media host), and
//! produces the uniform response envelope.
//!
//! ## Architecture
//!
//! - Depends only on `digistore-domain` (entities, value objects, ports)
//! - Receives its collaborators through constructor injection as
//!   `Arc<dyn …>` port objects
//! - External calls are awaited sequentially within one logical request;
//!   nothing is retried or rolled back at this layer
//!
//! ## Operations
//!
//! Product CRUD with ledger sync, the image pipeline, SKU and license
//! lifecycles, and the purchase-gated review lifecycle.

pub mod constants;
pub mod pagination;
pub mod use_cases;

pub use use_cases::{ProductService, ServiceSettings};
