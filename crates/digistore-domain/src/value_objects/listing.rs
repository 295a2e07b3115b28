//! Listing payloads and pagination metadata

use serde::{Deserialize, Serialize};

use crate::entities::Product;

/// Navigation links computed from total count and base path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    /// First page of the listing
    pub first: String,
    /// Previous page, absent on the first page
    pub previous: Option<String>,
    /// Current page
    #[serde(rename = "self")]
    pub current: String,
    /// Next page, absent on the last page
    pub next: Option<String>,
    /// Last page of the listing
    pub last: String,
}

/// Pagination metadata attached to search-mode listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Records skipped
    pub skip: u64,
    /// Page size, absent when the caller did not limit the listing
    pub limit: Option<u64>,
    /// Total records matching the filter
    pub total: u64,
    /// ceil(total / limit) when a limit is set, 1 otherwise
    pub pages: u64,
    /// Navigation links
    pub links: PageLinks,
}

/// One homepage group: a category and its latest products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category name
    pub category: String,
    /// Latest products in the category
    pub products: Vec<Product>,
}

/// Payload of the product listing operation
///
/// Homepage mode serializes as a bare group array with no metadata field;
/// search mode carries the items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
    /// Homepage mode: category-grouped products
    Grouped(Vec<CategoryGroup>),
    /// Search mode: one page of products plus pagination metadata
    Page {
        /// Products on this page
        products: Vec<Product>,
        /// Pagination metadata
        metadata: PageMetadata,
    },
}

/// Payload of the single-product fetch: the product plus unranked
/// same-category siblings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// The requested product
    pub product: Product,
    /// Other products sharing the category, self excluded
    pub related_products: Vec<Product>,
}
