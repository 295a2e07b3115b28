//! Payment ledger value objects

use std::collections::BTreeMap;

/// Specification for a ledger price record
///
/// Ledger prices are append-only: the service mints one per SKU creation
/// and one per price change, it never mutates an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerPriceSpec {
    /// Ledger product the price attaches to
    pub ledger_product_id: String,
    /// Amount in minor currency units
    pub unit_amount_minor: u64,
    /// ISO currency code (e.g. "usd")
    pub currency: String,
    /// Free-form metadata: SKU code, lifetime flag, local ids, product
    /// name/image snapshot
    pub metadata: BTreeMap<String, String>,
}
