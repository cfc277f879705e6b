//! Identity provider client configuration.

use url::Url;

/// Default per-request timeout in seconds.
///
/// An auth check sits on every gated request's critical path, so it fails
/// faster than a generic upstream call would.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The provider base URL could not be parsed.
    #[error("invalid identity provider base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Configuration for the identity provider HTTP client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the identity provider (e.g. `https://auth.example.org`).
    /// Stored without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a new configuration with the default timeout.
    ///
    /// The base URL is validated and any trailing slash is trimmed so the
    /// derived identity key is stable regardless of how the URL was written.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            source,
        })?;
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
