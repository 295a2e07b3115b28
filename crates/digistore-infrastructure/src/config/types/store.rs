//! Document store configuration

use serde::{Deserialize, Serialize};

/// Document store configuration
///
/// Only the in-memory backend ships with this workspace; the field
/// exists so deployments can select a persistent backend without a
/// config format change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selector (currently "memory")
    pub backend: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
        }
    }
}
