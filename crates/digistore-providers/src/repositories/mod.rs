//! In-memory repository implementations
//!
//! DashMap-backed document store backends for development and testing.
//! Data is not persisted and is lost on restart. Mutations on a single
//! product go through that product's entry lock, which is what makes the
//! combined feedback push + average set and the per-customer uniqueness
//! check atomic.

mod license;
mod order;
mod product;

pub use license::InMemoryLicenseRepository;
pub use order::InMemoryOrderRepository;
pub use product::InMemoryProductRepository;
