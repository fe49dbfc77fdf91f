use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a tuning value is present but cannot be parsed.
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
/// Returns `ConfigError` if a tuning value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let parse_width = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let width = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if width == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(width)
    };

    let shopify_store = or_default("SHOPIFY_STORE", "");
    let shopify_access_token = or_default("SHOPIFY_ACCESS_TOKEN", "");
    let shopify_api_version = or_default("SHOPIFY_API_VERSION", "2024-07");
    let algolia_app_id = or_default("ALGOLIA_APP_ID", "");
    let algolia_admin_api_key = or_default("ALGOLIA_ADMIN_API_KEY", "");

    let request_timeout_secs = parse_u64("SHOPSYNC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPSYNC_USER_AGENT", "shopsync/0.1 (catalog-sync)");
    let parallel_width = parse_width("SHOPSYNC_PARALLEL_WIDTH", "5")?;
    let log_level = or_default("SHOPSYNC_LOG_LEVEL", "info");

    Ok(AppConfig {
        shopify_store,
        shopify_access_token,
        shopify_api_version,
        algolia_app_id,
        algolia_admin_api_key,
        request_timeout_secs,
        user_agent,
        parallel_width,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
