use std::net::SocketAddr;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Reads `.env` (when present) and then builds [`AppConfig`] from the
/// process environment.
///
/// # Errors
///
/// Returns [`ConfigError`] when a required variable is missing or a value
/// does not parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Builds [`AppConfig`] from the process environment without touching `.env`.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Variable lookup with the `PDP_*` conventions: blank required values count
/// as missing, absent optional values take their default.
struct EnvSource<F> {
    lookup: F,
}

impl<F> EnvSource<F>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    fn required(&self, var: &str) -> Result<String, ConfigError> {
        (self.lookup)(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_owned()))
    }

    fn text(&self, var: &str, default: &str) -> String {
        (self.lookup)(var).unwrap_or_else(|_| default.to_owned())
    }

    fn parsed<T>(&self, var: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.text(var, default);
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: format!("\"{raw}\": {e}"),
            })
    }

    fn locale(&self, var: &str, default: &str) -> Result<String, ConfigError> {
        parse_locale_code(var, &self.text(var, default))
    }
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let env = EnvSource { lookup };

    Ok(AppConfig {
        storefront_domain: env.required("PDP_STOREFRONT_DOMAIN")?,
        storefront_token: env.required("PDP_STOREFRONT_TOKEN")?,
        env: parse_environment(&env.text("PDP_ENV", "development"))?,
        bind_addr: env.parsed::<SocketAddr>("PDP_BIND_ADDR", "0.0.0.0:3000")?,
        log_level: env.text("PDP_LOG_LEVEL", "info"),
        storefront_api_version: env.text("PDP_STOREFRONT_API_VERSION", "2024-01"),
        country: env.locale("PDP_COUNTRY", "US")?,
        language: env.locale("PDP_LANGUAGE", "EN")?,
        request_timeout_secs: env.parsed("PDP_REQUEST_TIMEOUT_SECS", "10")?,
        user_agent: env.text("PDP_USER_AGENT", "pdp/0.1 (storefront)"),
        max_retries: env.parsed("PDP_MAX_RETRIES", "2")?,
        retry_backoff_base_ms: env.parsed("PDP_RETRY_BACKOFF_BASE_MS", "250")?,
    })
}

/// Only `development`, `test` and `production` are accepted.
fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PDP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Validates a Storefront API enum code (`CountryCode` / `LanguageCode`) and
/// upper-cases it. Codes are two or three ASCII letters, optionally with an
/// underscore region suffix such as `PT_BR`.
fn parse_locale_code(var: &str, raw: &str) -> Result<String, ConfigError> {
    let code = raw.trim().to_uppercase();
    let valid = !code.is_empty()
        && code.split('_').all(|part| {
            (2..=3).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
        });

    if valid {
        Ok(code)
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("\"{raw}\" is not a storefront locale code"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
