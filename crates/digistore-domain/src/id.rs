//! Identifier generation
//!
//! All identifiers are uuid-derived. The original system derived the SKU
//! batch code and the media public id from wall-clock milliseconds plus a
//! short random fragment, which collides under concurrent requests in the
//! same millisecond; random 128-bit tokens remove that window.

use uuid::Uuid;

/// Generate a new entity identifier
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generate a short opaque token of `len` hex characters (max 32)
pub fn short_token(len: usize) -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(len.min(32));
    token
}

/// Generate the shared code for a SKU creation batch
pub fn sku_batch_code() -> String {
    short_token(crate::constants::SKU_CODE_LEN).to_uppercase()
}
