//! Identity provider client error types.

/// Errors from identity provider calls.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// HTTP transport error reaching the provider.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The provider did not answer within the configured timeout.
    #[error("identity provider timed out calling {endpoint}")]
    Timeout { endpoint: String },
    /// The provider rejected the token. Carries the provider's own message.
    #[error("{message}")]
    Rejected { message: String },
    /// The provider's body was not the expected JSON shape.
    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
