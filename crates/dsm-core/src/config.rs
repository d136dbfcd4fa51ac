use crate::app_config::{AppConfig, DEFAULT_SERVICE_NAME};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("DSM_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("DSM_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("DSM_LOG_LEVEL", "info");

    let service_name = or_default("DSM_SERVICE_NAME", DEFAULT_SERVICE_NAME);
    if service_name.trim().is_empty() {
        return Err(invalid("DSM_SERVICE_NAME", "must not be blank".to_string()));
    }

    let body_limit_bytes = or_default("DSM_BODY_LIMIT_BYTES", "2097152")
        .parse::<usize>()
        .map_err(|e| invalid("DSM_BODY_LIMIT_BYTES", e.to_string()))?;
    if body_limit_bytes == 0 {
        return Err(invalid(
            "DSM_BODY_LIMIT_BYTES",
            "must be greater than zero".to_string(),
        ));
    }

    let lexicon_path = lookup("DSM_LEXICON_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        bind_addr,
        log_level,
        service_name,
        body_limit_bytes,
        lexicon_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
