use std::collections::HashMap;
use std::env::VarError;

use super::*;
use crate::fields::FieldPath;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map configured for live API access.
fn live_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PRICECMP_USE_MOCK_DATA", "false");
    m.insert("PRICECMP_API_KEY", "test-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_to_mock_mode() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.use_mock_data);
    assert_eq!(cfg.api_base_url, "https://example-rapidapi-endpoint.com");
    assert_eq!(cfg.api_path, "/search");
    assert_eq!(cfg.api_host, "example-rapidapi-endpoint.com");
    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "pricecmp/0.1 (price-compare)");
    assert!(cfg.price_fields.is_none());
}

#[test]
fn build_app_config_live_mode_defers_api_key_check() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_USE_MOCK_DATA", "false");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.use_mock_data);
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_blank_api_key_counts_as_missing() {
    let mut map = live_env();
    map.insert("PRICECMP_API_KEY", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_production_defaults_to_warn() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn build_app_config_explicit_log_level_wins_in_production() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_ENV", "production");
    map.insert("PRICECMP_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_live_mode_succeeds_with_api_key() {
    let map = live_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.use_mock_data);
    assert_eq!(cfg.api_key.as_deref(), Some("test-key"));
}

#[test]
fn build_app_config_rejects_invalid_mock_flag() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_USE_MOCK_DATA", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICECMP_USE_MOCK_DATA"),
        "expected InvalidEnvVar(PRICECMP_USE_MOCK_DATA), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = live_env();
    map.insert("PRICECMP_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = live_env();
    map.insert("PRICECMP_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICECMP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PRICECMP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_price_field_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_PRICE_FIELDS", "price.value, sale_price ,unitPrice");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();

    let chains = cfg.field_chains();
    assert_eq!(
        chains.price.paths(),
        &[
            FieldPath::new(["price", "value"]),
            FieldPath::new(["sale_price"]),
            FieldPath::new(["unitPrice"]),
        ]
    );
    assert_eq!(chains.title, crate::FieldChains::default().title);
}

#[test]
fn build_app_config_rejects_bad_price_field_path() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PRICECMP_PRICE_FIELDS", "price..value");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICECMP_PRICE_FIELDS"),
        "expected InvalidEnvVar(PRICECMP_PRICE_FIELDS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = live_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"));
    assert!(rendered.contains("[redacted]"));
}
