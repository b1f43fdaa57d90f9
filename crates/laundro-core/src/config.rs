use crate::app_config::{AppConfig, Environment};
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
/// Parsing and validation are decoupled from the process environment so they
/// can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
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

    let env = parse_environment(&or_default("LAUNDRO_ENV", "development"))?;

    let bind_addr = parse_addr("LAUNDRO_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LAUNDRO_LOG_LEVEL", "info");
    let catalog_path = optional("LAUNDRO_CATALOG_PATH").map(PathBuf::from);

    let mail_endpoint = optional("LAUNDRO_MAIL_ENDPOINT");
    if mail_endpoint.is_none() && env == Environment::Production {
        return Err(ConfigError::MissingEnvVar(
            "LAUNDRO_MAIL_ENDPOINT".to_string(),
        ));
    }
    let mail_timeout_secs = parse_u64("LAUNDRO_MAIL_TIMEOUT_SECS", "10")?;
    let mail_user_agent = or_default("LAUNDRO_MAIL_USER_AGENT", "laundro/0.1 (site-forms)");

    let rate_limit_max_requests = parse_usize("LAUNDRO_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("LAUNDRO_RATE_LIMIT_WINDOW_SECS", "60")?;
    if rate_limit_window_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LAUNDRO_RATE_LIMIT_WINDOW_SECS".to_string(),
            reason: "window must be at least one second".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        mail_endpoint,
        mail_timeout_secs,
        mail_user_agent,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LAUNDRO_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
