//! Configuration loader
//!
//! Merges configuration from defaults, an optional TOML file and
//! prefixed environment variables using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use digistore_domain::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix, double underscore as the
    ///    nesting separator (e.g. `DIGISTORE_LEDGER__API_KEY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore keeps single underscores inside key names
        // (api_key, cloud_name) intact.
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the default configuration file, if any exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        validate_app_config(config)
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_store_config(config)?;
    validate_ledger_config(config)?;
    validate_media_config(config)?;
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    if config.store.backend != "memory" {
        return Err(Error::Configuration {
            message: format!(
                "Unsupported store backend: {}. Only \"memory\" is available",
                config.store.backend
            ),
            source: None,
        });
    }
    Ok(())
}

fn validate_ledger_config(config: &AppConfig) -> Result<()> {
    if config.ledger.timeout_secs == 0 {
        return Err(Error::Configuration {
            message: "Ledger request timeout cannot be 0".to_string(),
            source: None,
        });
    }
    if config.ledger.currency.len() != 3 {
        return Err(Error::Configuration {
            message: format!(
                "Ledger currency must be a three-letter ISO code, got: {}",
                config.ledger.currency
            ),
            source: None,
        });
    }
    Ok(())
}

fn validate_media_config(config: &AppConfig) -> Result<()> {
    if config.media.timeout_secs == 0 {
        return Err(Error::Configuration {
            message: "Media request timeout cannot be 0".to_string(),
            source: None,
        });
    }
    let partial = [
        config.media.cloud_name.is_some(),
        config.media.api_key.is_some(),
        config.media.api_secret.is_some(),
    ];
    if partial.iter().any(|set| *set) && !partial.iter().all(|set| *set) {
        return Err(Error::Configuration {
            message: "Media host credentials are incomplete: cloud_name, api_key and api_secret \
                      must be set together"
                .to_string(),
            source: None,
        });
    }
    if config.media.image_width == 0 || config.media.image_height == 0 {
        return Err(Error::Configuration {
            message: "Media image transform dimensions cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
