//! Value Objects
//!
//! Immutable data shapes exchanged across layer boundaries: the uniform
//! response envelope, listing queries and pagination metadata, and the
//! input/patch types consumed by the product service.

pub mod envelope;
pub mod image;
pub mod ledger;
pub mod listing;
pub mod query;
pub mod sku;

pub use envelope::ApiResponse;
pub use image::{ImageTransform, UploadedImage};
pub use ledger::LedgerPriceSpec;
pub use listing::{CategoryGroup, PageLinks, PageMetadata, ProductDetail, ProductListing};
pub use query::{CreateProductInput, ProductFilter, ProductPatch, ProductQuery};
pub use sku::{SkuInput, SkuPatch};
