//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers, following
//! the Dependency Inversion Principle: the domain defines the interfaces,
//! providers and infrastructure implement them.
//!
//! ## Organization
//!
//! - **repositories** - Document store access (products, orders, licenses)
//! - **providers** - External collaborator ports (payment ledger, media host)

pub mod providers;
pub mod repositories;

pub use providers::{MediaHostProvider, PaymentLedgerProvider};
pub use repositories::{LicenseRepository, OrderRepository, ProductRepository};
