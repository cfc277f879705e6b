//! The identity derived from a successful provider response.

use serde::Serialize;

/// An authenticated caller.
///
/// Only constructed after the provider accepted a token, so holding an
/// `Identity` is proof the request passed the authorization gate. The value
/// travels through request extensions rather than ambient session state.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    /// Username reported by the provider.
    pub user: String,
    /// Stable key for this identity: `<provider-base-url>:<user>`.
    pub session_key: String,
}

impl Identity {
    /// Derive an identity from the provider base URL and the verified user.
    pub fn new(provider_base_url: &str, user: impl Into<String>) -> Self {
        let user = user.into();
        let session_key = format!("{provider_base_url}:{user}");
        Self { user, session_key }
    }
}
