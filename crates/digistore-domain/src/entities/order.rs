//! Order entity
//!
//! Orders are owned by the order module of the larger system; this crate
//! only reads them to verify purchase history before accepting a review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completed purchase linking a customer to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier of the order
    pub id: String,
    /// Purchasing customer
    pub customer_id: String,
    /// Purchased product
    pub product_id: String,
    /// Completion timestamp
    pub created_at: DateTime<Utc>,
}
