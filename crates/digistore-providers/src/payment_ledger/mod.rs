//! Payment ledger providers
//!
//! Implementations of the [`PaymentLedgerProvider`] port:
//!
//! - **Stripe**: the real products/prices API
//! - **Null**: no-op provider for testing and development
//!
//! [`PaymentLedgerProvider`]: digistore_domain::ports::PaymentLedgerProvider

mod null;
mod stripe;

pub use null::NullPaymentLedgerProvider;
pub use stripe::StripeLedgerProvider;
