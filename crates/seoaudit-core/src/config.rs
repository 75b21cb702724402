use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("SEOAUDIT_ENV", "development"));
    let log_level = or_default("SEOAUDIT_LOG_LEVEL", "info");
    let audit_config_path = PathBuf::from(or_default(
        "SEOAUDIT_CONFIG_PATH",
        "./config/audit.yaml",
    ));
    let out_dir = PathBuf::from(or_default("SEOAUDIT_OUT_DIR", "./reports"));

    let fetch_timeout_secs = parse_u64("SEOAUDIT_FETCH_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("SEOAUDIT_USER_AGENT", "seoaudit/0.1 (on-page-audit)");
    let inter_request_delay_ms = parse_u64("SEOAUDIT_INTER_REQUEST_DELAY_MS", "500")?;
    let max_pages = parse_usize("SEOAUDIT_MAX_PAGES", "100")?;

    Ok(AppConfig {
        env,
        log_level,
        audit_config_path,
        out_dir,
        fetch_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        max_pages,
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
