//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "DIGISTORE";

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "DIGISTORE_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "digistore.toml";

/// Default configuration directory (relative to the working directory)
pub const DEFAULT_CONFIG_DIR: &str = "config";
