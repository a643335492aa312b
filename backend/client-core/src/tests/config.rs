// Unit tests for config module
// Load/save round trip, validation and env overrides

use crate::BASE_URL_ENV_VAR;
use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::render::DateLocale;

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First run has no config; the CLI must still work.
///
/// **BUG THIS CATCHES**: Would catch treating a missing file as an error.
#[test]
fn given_no_config_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.server.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.server.request_timeout_secs, None);
}

/// **VALUE**: Verifies save then load returns the same values.
///
/// **WHY THIS MATTERS**: Display preferences must survive restarts.
///
/// **BUG THIS CATCHES**: Would catch a field missing from serialization.
#[test]
fn given_saved_config_when_loading_then_values_survive() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.server.base_url = String::from("https://news.example.com");
    config.server.request_timeout_secs = Some(15);
    config.display.date_locale = DateLocale::De;
    config.display.utc_offset_minutes = Some(60);

    config.save(dir.path()).unwrap();
    let loaded = AppConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

/// **VALUE**: Verifies a corrupt file is reported, not silently replaced.
///
/// **WHY THIS MATTERS**: Overwriting a hand-edited file with defaults loses user data.
///
/// **BUG THIS CATCHES**: Would catch parse errors mapped to defaults.
#[test]
fn given_corrupt_config_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies validation of URL scheme, timeout and offset.
///
/// **WHY THIS MATTERS**: A bad base URL would fail every request with a confusing error.
///
/// **BUG THIS CATCHES**: Would catch any of the checks being dropped.
#[test]
fn given_invalid_values_when_validating_then_returns_validation_error() {
    let mut bad_url = AppConfig::default();
    bad_url.server.base_url = String::from("ftp://news");
    assert!(matches!(bad_url.validate(), Err(ConfigError::ValidationError { .. })));

    let mut zero_timeout = AppConfig::default();
    zero_timeout.server.request_timeout_secs = Some(0);
    assert!(zero_timeout.validate().is_err());

    let mut bad_offset = AppConfig::default();
    bad_offset.display.utc_offset_minutes = Some(24 * 60);
    assert!(bad_offset.validate().is_err());

    let mut bad_version = AppConfig::default();
    bad_version.version = 2;
    assert!(bad_version.validate().is_err());
}

/// **VALUE**: Verifies the env var overrides the configured base URL.
///
/// **WHY THIS MATTERS**: `.env` files point the client at staging without editing config.
///
/// **BUG THIS CATCHES**: Would catch the override being ignored or not validated.
#[test]
#[serial]
fn given_base_url_env_var_when_applying_overrides_then_base_url_replaced() {
    // SAFETY: serialised with other env-mutating tests
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "https://staging.example.com") };

    let mut config = AppConfig::default();
    let result = config.apply_env_overrides();

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };

    assert!(result.is_ok());
    assert_eq!(config.server.base_url, "https://staging.example.com");
}

/// **VALUE**: Verifies an invalid env override is rejected.
///
/// **BUG THIS CATCHES**: Would catch overrides bypassing validation.
#[test]
#[serial]
fn given_invalid_base_url_env_var_when_applying_overrides_then_returns_error() {
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "not-a-url") };

    let mut config = AppConfig::default();
    let result = config.apply_env_overrides();

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
