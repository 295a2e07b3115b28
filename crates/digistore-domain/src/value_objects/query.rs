//! Listing queries and product inputs

use serde::{Deserialize, Serialize};

/// Input for product creation
///
/// When `stripe_product_id` is absent the service creates the ledger
/// record first and stores the returned reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductInput {
    /// Display name
    pub product_name: String,
    /// Long description
    pub description: String,
    /// Category used for grouping and related-product lookups
    pub category: String,
    /// Pre-existing ledger product reference, if the caller already has one
    #[serde(default)]
    pub stripe_product_id: Option<String>,
}

/// Partial update for a product's descriptive fields
///
/// Fields left as `None` are not touched. Carrying an explicit
/// `stripe_product_id` suppresses the ledger name/description push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    /// New display name
    pub product_name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New category
    pub category: Option<String>,
    /// Explicit ledger reference override
    pub stripe_product_id: Option<String>,
}

impl ProductPatch {
    /// Whether the patch carries an explicit ledger reference
    pub fn sets_ledger_reference(&self) -> bool {
        self.stripe_product_id.is_some()
    }
}

/// Structured listing query, as produced by the inbound boundary
///
/// The `homepage` flag selects grouped landing-page mode and is stripped
/// before the remaining fields are translated into a store filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Homepage (grouped) mode selector
    #[serde(default)]
    pub homepage: bool,
    /// Exact category filter
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name
    pub search: Option<String>,
    /// Records to skip (defaults to 0)
    pub skip: Option<u64>,
    /// Page size (defaults to 10)
    pub limit: Option<u64>,
}

impl ProductQuery {
    /// Drop the homepage flag and keep the filter/pagination fields
    pub fn into_filter(self) -> (ProductFilter, Option<u64>, Option<u64>) {
        (
            ProductFilter {
                category: self.category,
                search: self.search,
            },
            self.skip,
            self.limit,
        )
    }
}

/// Store-level filter derived from a [`ProductQuery`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name
    pub search: Option<String>,
}
