use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
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

    let log_level = or_default("CHARTLAKE_LOG_LEVEL", "info");

    let chart_base_url = or_default(
        "CHARTLAKE_CHART_BASE_URL",
        "https://www.billboard.com/charts",
    );
    let chart_timeout_secs = parse_u64("CHARTLAKE_CHART_TIMEOUT_SECS", "30")?;
    let chart_user_agent = or_default(
        "CHARTLAKE_CHART_USER_AGENT",
        "chartlake/0.1 (chart-ingestion)",
    );

    let store_bucket = or_default("CHARTLAKE_STORE_BUCKET", "chart-datalake");
    let store_endpoint = lookup("CHARTLAKE_STORE_ENDPOINT").ok();
    let store_token = lookup("CHARTLAKE_STORE_TOKEN").ok();
    let store_root = PathBuf::from(or_default("CHARTLAKE_STORE_ROOT", "./data"));

    // Daily at 08:00 UTC.
    let ingest_schedule = or_default("CHARTLAKE_INGEST_SCHEDULE", "0 0 8 * * *");

    Ok(AppConfig {
        log_level,
        chart_base_url,
        chart_timeout_secs,
        chart_user_agent,
        store_bucket,
        store_endpoint,
        store_token,
        store_root,
        ingest_schedule,
    })
}
