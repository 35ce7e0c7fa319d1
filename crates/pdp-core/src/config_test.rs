use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PDP_STOREFRONT_DOMAIN", "hydrogen-preview.myshopify.com");
    m.insert("PDP_STOREFRONT_TOKEN", "public-token");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PDP_ENV"));
}

#[test]
fn build_app_config_fails_without_storefront_domain() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PDP_STOREFRONT_DOMAIN"),
        "expected MissingEnvVar(PDP_STOREFRONT_DOMAIN), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_storefront_token() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PDP_STOREFRONT_DOMAIN", "hydrogen-preview.myshopify.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PDP_STOREFRONT_TOKEN"),
        "expected MissingEnvVar(PDP_STOREFRONT_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = full_env();
    map.insert("PDP_STOREFRONT_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PDP_STOREFRONT_TOKEN"),
        "expected MissingEnvVar(PDP_STOREFRONT_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.storefront_domain, "hydrogen-preview.myshopify.com");
    assert_eq!(cfg.storefront_api_version, "2024-01");
    assert_eq!(cfg.country, "US");
    assert_eq!(cfg.language, "EN");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "pdp/0.1 (storefront)");
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.retry_backoff_base_ms, 250);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("PDP_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PDP_BIND_ADDR"),
        "expected InvalidEnvVar(PDP_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_upper_cases_locale_overrides() {
    let mut map = full_env();
    map.insert("PDP_COUNTRY", "ca");
    map.insert("PDP_LANGUAGE", "pt_br");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.country, "CA");
    assert_eq!(cfg.language, "PT_BR");
}

#[test]
fn build_app_config_rejects_malformed_country() {
    let mut map = full_env();
    map.insert("PDP_COUNTRY", "United States");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PDP_COUNTRY"),
        "expected InvalidEnvVar(PDP_COUNTRY), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("PDP_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("PDP_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PDP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PDP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_max_retries_invalid() {
    let mut map = full_env();
    map.insert("PDP_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PDP_MAX_RETRIES"),
        "expected InvalidEnvVar(PDP_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn build_app_config_retry_backoff_override() {
    let mut map = full_env();
    map.insert("PDP_RETRY_BACKOFF_BASE_MS", "1000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.retry_backoff_base_ms, 1000);
}

#[test]
fn debug_output_redacts_token() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("public-token"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
