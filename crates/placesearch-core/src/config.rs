use crate::app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_USER_AGENT};
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
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let non_empty = |var: &str, value: String| -> Result<String, ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(value)
    };

    let api_key = non_empty("PLACES_API_KEY", require("PLACES_API_KEY")?)?;
    let language = non_empty(
        "PLACES_LANGUAGE",
        or_default("PLACES_LANGUAGE", DEFAULT_LANGUAGE),
    )?;
    let base_url = or_default("PLACES_BASE_URL", DEFAULT_BASE_URL);

    let request_timeout_secs = parse_u64("PLACES_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("PLACES_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("PLACES_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PLACES_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_key,
        language,
        base_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
