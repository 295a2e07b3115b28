//! Product Service Use Cases
//!
//! One service struct, with its operations split by lifecycle:
//!
//! - `product_service` - service wiring plus product CRUD and listing
//! - `image_ops` - image host pipeline
//! - `sku_ops` - SKU batch creation, patching, deletion
//! - `license_ops` - license-key inventory
//! - `review_ops` - purchase-gated reviews and the rating average

mod image_ops;
mod license_ops;
mod product_service;
mod review_ops;
mod sku_ops;

pub use product_service::{ProductService, ServiceSettings};
