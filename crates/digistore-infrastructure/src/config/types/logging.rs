//! Logging configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json_format: bool,
    /// Optional log file path (daily rolling)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: false,
            file_output: None,
        }
    }
}
