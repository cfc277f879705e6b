//! Environment configuration for the front door.

use std::str::FromStr;

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    /// An environment variable could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Identity provider base URL (`AUTH_BASE_URL`, required).
    pub auth_base_url: String,
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// Identity provider request timeout in seconds (`AUTH_TIMEOUT_SECS`,
    /// default 10).
    pub auth_timeout_secs: u64,
    /// Development mode (`DEVELOPMENT`): lowers the default log level to
    /// `debug`.
    pub development: bool,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_base_url =
            std::env::var("AUTH_BASE_URL").map_err(|_| ConfigError::Missing("AUTH_BASE_URL"))?;
        let port = parse_or_default("PORT", std::env::var("PORT").ok(), 8080)?;
        let auth_timeout_secs = parse_or_default(
            "AUTH_TIMEOUT_SECS",
            std::env::var("AUTH_TIMEOUT_SECS").ok(),
            10,
        )?;
        let development = flag_enabled(std::env::var("DEVELOPMENT").ok());

        Ok(Self {
            auth_base_url,
            port,
            auth_timeout_secs,
            development,
        })
    }
}

/// Parse an optional raw value, falling back to a default when absent.
fn parse_or_default<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// A flag variable is enabled when set to anything except `""`, `"false"`
/// or `"0"`.
fn flag_enabled(raw: Option<String>) -> bool {
    raw.is_some_and(|v| {
        let v = v.trim().to_lowercase();
        !v.is_empty() && v != "false" && v != "0"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_default_absent_uses_default() {
        let port: u16 = parse_or_default("PORT", None, 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn parse_or_default_present_parses() {
        let port: u16 = parse_or_default("PORT", Some("5000".to_string()), 8080).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn parse_or_default_garbage_is_invalid() {
        let result: Result<u16, _> = parse_or_default("PORT", Some("not-a-port".into()), 8080);
        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }

    #[test]
    fn flag_enabled_variants() {
        assert!(!flag_enabled(None));
        assert!(!flag_enabled(Some("".into())));
        assert!(!flag_enabled(Some("false".into())));
        assert!(!flag_enabled(Some("0".into())));
        assert!(flag_enabled(Some("1".into())));
        assert!(flag_enabled(Some("true".into())));
        assert!(flag_enabled(Some("yes".into())));
    }
}
