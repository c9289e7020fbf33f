use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_FEDREG_BASE_URL: &str = "https://www.federalregister.gov/api/v1/";

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
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_positive = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let value = parse_u64(var, default)?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let to_u32 = |var: &str, value: u64| -> Result<u32, ConfigError> {
        u32::try_from(value).map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let to_usize = |var: &str, value: u64| -> Result<usize, ConfigError> {
        usize::try_from(value).map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("RULEWATCH_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("RULEWATCH_OUTPUT_DIR", "."));
    let fedreg_base_url = or_default("RULEWATCH_FEDREG_BASE_URL", DEFAULT_FEDREG_BASE_URL);
    let user_agent = or_default(
        "RULEWATCH_USER_AGENT",
        "rulewatch/0.1 (regulatory-tracking)",
    );

    let lookback_days = to_u32(
        "RULEWATCH_LOOKBACK_DAYS",
        parse_positive("RULEWATCH_LOOKBACK_DAYS", "365")?,
    )?;
    let per_page = to_u32(
        "RULEWATCH_PER_PAGE",
        parse_positive("RULEWATCH_PER_PAGE", "100")?,
    )?;
    let request_timeout_secs = parse_positive("RULEWATCH_REQUEST_TIMEOUT_SECS", "20")?;
    let rolling_window = to_usize(
        "RULEWATCH_ROLLING_WINDOW",
        parse_positive("RULEWATCH_ROLLING_WINDOW", "7")?,
    )?;
    let months = to_usize("RULEWATCH_MONTHS", parse_positive("RULEWATCH_MONTHS", "12")?)?;

    Ok(AppConfig {
        log_level,
        output_dir,
        fedreg_base_url,
        lookback_days,
        per_page,
        request_timeout_secs,
        user_agent,
        rolling_window,
        months,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
