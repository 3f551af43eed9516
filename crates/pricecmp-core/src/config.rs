use crate::app_config::{AppConfig, Environment};
use crate::fields::FieldChain;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got \"{other}\""),
            }),
        }
    };

    let env = parse_environment(&or_default("PRICECMP_ENV", "development"));
    let log_level = or_default("PRICECMP_LOG_LEVEL", default_log_level(&env));
    let use_mock_data = parse_bool("PRICECMP_USE_MOCK_DATA", "true")?;

    let api_base_url = or_default(
        "PRICECMP_API_BASE_URL",
        "https://example-rapidapi-endpoint.com",
    );
    let api_path = or_default("PRICECMP_API_PATH", "/search");
    let api_host = or_default("PRICECMP_API_HOST", "example-rapidapi-endpoint.com");
    // Presence is checked when the remote source is built.
    let api_key = lookup("PRICECMP_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    let request_timeout_secs = parse_u64("PRICECMP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PRICECMP_USER_AGENT", "pricecmp/0.1 (price-compare)");

    let price_fields = match lookup("PRICECMP_PRICE_FIELDS") {
        Ok(raw) if !raw.trim().is_empty() => Some(FieldChain::parse_list(&raw).map_err(|bad| {
            ConfigError::InvalidEnvVar {
                var: "PRICECMP_PRICE_FIELDS".to_string(),
                reason: format!("invalid field path \"{bad}\""),
            }
        })?),
        _ => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        use_mock_data,
        api_base_url,
        api_path,
        api_host,
        api_key,
        request_timeout_secs,
        user_agent,
        price_fields,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn default_log_level(env: &Environment) -> &'static str {
    match env {
        Environment::Production => "warn",
        Environment::Development | Environment::Test => "info",
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
