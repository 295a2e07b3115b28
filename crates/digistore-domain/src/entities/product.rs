//! Product aggregate
//!
//! A product mirrors a record in the external payment ledger
//! (`stripe_product_id`) and an asset on the image host (`image_details`).
//! SKUs and feedback entries are embedded sub-documents, mutated only
//! through the product service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_AVG_RATING;

/// Metadata returned by the image host for the current product image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    /// Host-side public identifier, required for destroy/overwrite
    pub public_id: String,
    /// Image format reported by the host (e.g. "png")
    pub format: Option<String>,
    /// Stored size in bytes
    pub bytes: Option<u64>,
    /// Pixel width after the transform pipeline
    pub width: Option<u32>,
    /// Pixel height after the transform pipeline
    pub height: Option<u32>,
}

/// Purchasable variant of a product
///
/// ## Business Rules
///
/// - `stripe_price_id` is immutable once set: a price change mints a new
///   ledger price record, the superseded one stays active until the SKU
///   deletion path deactivates it.
/// - `sku_code` is shared by every SKU created in the same batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// Unique identifier of the SKU
    pub id: String,
    /// Price in major currency units
    pub price: u64,
    /// Whether the license sold under this SKU is a lifetime license
    pub lifetime: bool,
    /// Reference to the mirrored ledger price record
    pub stripe_price_id: Option<String>,
    /// Shared code assigned to the SKU's creation batch
    pub sku_code: String,
}

/// Customer review embedded in a product
///
/// At most one feedback entry per `customer_id` per product; the store
/// enforces the compound uniqueness on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier of the feedback entry
    pub id: String,
    /// Rating given by the customer (1..N, upper bound unenforced)
    pub rating: u32,
    /// Free-text review message
    pub feedback_msg: String,
    /// Identity of the reviewing customer
    pub customer_id: String,
    /// Display name of the reviewing customer
    pub customer_name: String,
}

/// Digital product aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier of the product
    pub id: String,
    /// Display name
    pub product_name: String,
    /// Long description
    pub description: String,
    /// Category used for grouping and related-product lookups
    pub category: String,
    /// Reference to the mirrored ledger product record
    pub stripe_product_id: Option<String>,
    /// Secure URL of the current product image
    pub image: Option<String>,
    /// Image host metadata for the current product image
    pub image_details: Option<ImageDetails>,
    /// Mean of all feedback ratings, 2-decimal string, "0" when empty
    pub avg_rating: String,
    /// Purchasable variants, ordered by insertion
    pub skus: Vec<Sku>,
    /// Customer reviews, ordered by insertion
    pub feedbacks: Vec<Feedback>,
    /// Set when a local write committed but the ledger call that followed
    /// it failed; cleared by the next successful ledger sync
    pub ledger_sync_pending: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a product shell with no image, SKUs or feedback
    pub fn new<S: Into<String>>(product_name: S, description: S, category: S) -> Self {
        let now = Utc::now();
        Self {
            id: crate::id::new_id(),
            product_name: product_name.into(),
            description: description.into(),
            category: category.into(),
            stripe_product_id: None,
            image: None,
            image_details: None,
            avg_rating: EMPTY_AVG_RATING.to_string(),
            skus: Vec::new(),
            feedbacks: Vec::new(),
            ledger_sync_pending: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find an embedded SKU by id
    pub fn sku(&self, sku_id: &str) -> Option<&Sku> {
        self.skus.iter().find(|s| s.id == sku_id)
    }

    /// Find an embedded feedback entry by id
    pub fn feedback(&self, feedback_id: &str) -> Option<&Feedback> {
        self.feedbacks.iter().find(|f| f.id == feedback_id)
    }

    /// Whether the given customer already reviewed this product
    pub fn has_feedback_from(&self, customer_id: &str) -> bool {
        self.feedbacks.iter().any(|f| f.customer_id == customer_id)
    }
}

/// Render the mean of `ratings` as a 2-decimal string
///
/// Returns "0" for an empty slice; this is the value `Product::avg_rating`
/// must always carry.
pub fn average_rating(ratings: &[u32]) -> String {
    if ratings.is_empty() {
        return EMPTY_AVG_RATING.to_string();
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    format!("{mean:.2}")
}
