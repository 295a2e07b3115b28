//! Configuration loader tests

use std::io::Write;

use digistore_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::NamedTempFile;

#[test]
fn defaults_without_file_or_env() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/digistore.toml")
        .load()
        .expect("defaults should load");

    assert_eq!(config.store.backend, "memory");
    assert_eq!(config.ledger.currency, "usd");
    assert_eq!(config.ledger.timeout_secs, 30);
    assert!(config.ledger.api_key.is_none());
    assert_eq!(config.media.folder, "digistore/products");
    assert_eq!(config.media.public_id_prefix, "digistore_");
    assert_eq!(config.media.image_width, 600);
    assert_eq!(config.media.image_height, 600);
    assert!(!config.media.has_account());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn toml_file_overrides_defaults() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[ledger]
api_key = "sk_test_abc"
currency = "eur"
timeout_secs = 5

[media]
folder = "shop/images"
image_width = 800
image_height = 450

[logging]
level = "debug"
json_format = true
"#
    )
    .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("config should load");

    assert_eq!(config.ledger.api_key.as_deref(), Some("sk_test_abc"));
    assert_eq!(config.ledger.currency, "eur");
    assert_eq!(config.ledger.timeout_secs, 5);
    // Untouched sections keep their defaults
    assert_eq!(config.store.backend, "memory");
    assert_eq!(config.media.folder, "shop/images");
    assert_eq!(config.media.public_id_prefix, "digistore_");
    assert_eq!(config.media.image_width, 800);
    assert_eq!(config.media.image_height, 450);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn env_overrides_toml() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[ledger]
currency = "eur"
"#
    )
    .expect("write config");

    // Distinct prefix keeps this test isolated from the process env
    unsafe {
        std::env::set_var("DIGISTORE_TEST_LEDGER__CURRENCY", "gbp");
    }

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("DIGISTORE_TEST")
        .load()
        .expect("config should load");

    unsafe {
        std::env::remove_var("DIGISTORE_TEST_LEDGER__CURRENCY");
    }

    assert_eq!(config.ledger.currency, "gbp");
}

#[test]
fn env_keys_with_inner_underscores_survive() {
    unsafe {
        std::env::set_var("DIGISTORE_KEYS_MEDIA__CLOUD_NAME", "demo-cloud");
        std::env::set_var("DIGISTORE_KEYS_MEDIA__API_KEY", "key123");
        std::env::set_var("DIGISTORE_KEYS_MEDIA__API_SECRET", "secret456");
    }

    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/digistore.toml")
        .with_env_prefix("DIGISTORE_KEYS")
        .load()
        .expect("config should load");

    unsafe {
        std::env::remove_var("DIGISTORE_KEYS_MEDIA__CLOUD_NAME");
        std::env::remove_var("DIGISTORE_KEYS_MEDIA__API_KEY");
        std::env::remove_var("DIGISTORE_KEYS_MEDIA__API_SECRET");
    }

    assert_eq!(config.media.cloud_name.as_deref(), Some("demo-cloud"));
    assert!(config.media.has_account());
}

#[test]
fn rejects_unknown_store_backend() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[store]
backend = "postgres"
"#
    )
    .expect("write config");

    let result = ConfigLoader::new().with_config_path(file.path()).load();
    let err = result.expect_err("unknown backend should be rejected");
    assert!(err.to_string().contains("store backend"));
}

#[test]
fn rejects_partial_media_credentials() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[media]
cloud_name = "demo-cloud"
"#
    )
    .expect("write config");

    let result = ConfigLoader::new().with_config_path(file.path()).load();
    let err = result.expect_err("partial credentials should be rejected");
    assert!(err.to_string().contains("incomplete"));
}

#[test]
fn rejects_zero_timeout() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[ledger]
timeout_secs = 0
"#
    )
    .expect("write config");

    let result = ConfigLoader::new().with_config_path(file.path()).load();
    assert!(result.is_err());
}

#[test]
fn rejects_bad_currency_code() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[ledger]
currency = "dollars"
"#
    )
    .expect("write config");

    let result = ConfigLoader::new().with_config_path(file.path()).load();
    let err = result.expect_err("non ISO currency should be rejected");
    assert!(err.to_string().contains("currency"));
}

#[test]
fn save_and_reload_round_trip() {
    let file = NamedTempFile::new().expect("temp file");
    let loader = ConfigLoader::new().with_config_path(file.path());

    let mut config = AppConfig::default();
    config.ledger.currency = "eur".to_string();
    config.media.folder = "shop/images".to_string();

    loader
        .save_to_file(&config, file.path())
        .expect("save should succeed");

    let reloaded = loader.load().expect("reload should succeed");
    assert_eq!(reloaded.ledger.currency, "eur");
    assert_eq!(reloaded.media.folder, "shop/images");
}
