//! Provider implementations for the Digistore backend
//!
//! Implements the domain ports against the real collaborators:
//!
//! - **payment_ledger** - Stripe products/prices API over reqwest, plus a
//!   null provider for testing
//! - **media_host** - Cloudinary upload/destroy API over reqwest, plus a
//!   null provider for testing
//! - **repositories** - in-memory document store backends for
//!   development and testing
//! - **utils** - shared HTTP response handling

pub mod constants;
pub mod media_host;
pub mod payment_ledger;
pub mod repositories;
pub mod utils;

pub use media_host::{CloudinaryMediaProvider, NullMediaHostProvider};
pub use payment_ledger::{NullPaymentLedgerProvider, StripeLedgerProvider};
pub use repositories::{
    InMemoryLicenseRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
