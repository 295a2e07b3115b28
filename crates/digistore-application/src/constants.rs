//! Application-layer constants

/// Base path used when computing pagination links
pub const PRODUCTS_BASE_PATH: &str = "/products";

// Envelope messages, uniform across operations
pub const MSG_PRODUCT_CREATED: &str = "Product created successfully";
pub const MSG_PRODUCTS_FETCHED: &str = "Products fetched successfully";
pub const MSG_PRODUCT_FETCHED: &str = "Product fetched successfully";
pub const MSG_PRODUCT_UPDATED: &str = "Product updated successfully";
pub const MSG_PRODUCT_DELETED: &str = "Product deleted successfully";
pub const MSG_IMAGE_UPLOADED: &str = "Image uploaded successfully";
pub const MSG_SKUS_ADDED: &str = "Product skus updated successfully";
pub const MSG_SKU_UPDATED: &str = "Sku updated successfully";
pub const MSG_SKU_DELETED: &str = "Sku deleted successfully";
pub const MSG_LICENSE_ADDED: &str = "License key added successfully";
pub const MSG_LICENSE_REMOVED: &str = "License key removed successfully";
pub const MSG_LICENSES_FETCHED: &str = "Licenses fetched successfully";
pub const MSG_LICENSE_UPDATED: &str = "License key updated successfully";
pub const MSG_REVIEW_ADDED: &str = "Review added successfully";
pub const MSG_REVIEW_REMOVED: &str = "Review removed successfully";

// Client-error messages for the two distinguished validation cases
pub const MSG_DUPLICATE_REVIEW: &str = "You have already given the review for this product";
pub const MSG_REVIEW_WITHOUT_PURCHASE: &str =
    "You have not purchased this product, review is not allowed";
