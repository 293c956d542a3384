use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_EPIC_GRAPHQL_URL: &str = "https://www.epicgames.com/store/backend/graphql-proxy";

const DEFAULT_USER_AGENT: &str = "freegame/0.1 (deal-aggregation)";

/// Reads `FREEGAME_*` settings after merging a `.env` file, if one exists.
///
/// Every setting has a default, so an empty environment is valid.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] when a variable is set to something
/// unusable, such as a non-numeric timeout or an endpoint without a scheme.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but skips `.env`; only the process
/// environment is consulted.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for malformed values.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let log_level = or_default("FREEGAME_LOG_LEVEL", "info");
    let epic_graphql_url = parse_endpoint(&or_default(
        "FREEGAME_EPIC_GRAPHQL_URL",
        DEFAULT_EPIC_GRAPHQL_URL,
    ))?;
    let scraper_user_agent = or_default("FREEGAME_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_request_timeout_secs =
        parse_optional_u64("FREEGAME_SCRAPER_REQUEST_TIMEOUT_SECS")?;

    Ok(AppConfig {
        log_level,
        epic_graphql_url,
        scraper_user_agent,
        scraper_request_timeout_secs,
    })
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "FREEGAME_EPIC_GRAPHQL_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{raw}\""),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
