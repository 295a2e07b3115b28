//! SKU inputs and patches

use serde::{Deserialize, Serialize};

/// One entry of a SKU creation batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuInput {
    /// Price in major currency units
    pub price: u64,
    /// Whether this SKU sells a lifetime license
    #[serde(default)]
    pub lifetime: bool,
    /// Pre-existing ledger price reference; entries without one get a
    /// freshly minted ledger price
    #[serde(default)]
    pub stripe_price_id: Option<String>,
}

/// Partial update for an embedded SKU
///
/// Fields left as `None` are not touched. A changed price makes the
/// service mint a new ledger price and carry its id here before the
/// patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkuPatch {
    /// New price in major currency units
    pub price: Option<u64>,
    /// New lifetime flag
    pub lifetime: Option<bool>,
    /// New ledger price reference
    pub stripe_price_id: Option<String>,
}
