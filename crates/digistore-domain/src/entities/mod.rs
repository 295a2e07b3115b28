//! Domain Entities
//!
//! Aggregate roots and their embedded sub-documents. `Product` owns its
//! SKUs and feedback entries; licenses reference a SKU but live in their
//! own collection; orders are read-only here and gate review creation.

pub mod license;
pub mod order;
pub mod product;

pub use license::License;
pub use order::Order;
pub use product::{average_rating, Feedback, ImageDetails, Product, Sku};
