//! Token verification against the remote identity provider.

use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::AuthError;
use crate::identity::Identity;

/// Provider endpoint that validates a token.
const TOKEN_ENDPOINT: &str = "/api/V2/token";

/// Seam for token verification.
///
/// The HTTP front door holds this as a trait object so the authorization
/// stage can be exercised with a fake verifier in tests.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a bearer token, returning the derived [`Identity`] on success.
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Real HTTP verifier backed by the remote identity provider.
#[derive(Debug)]
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTokenVerifier {
    /// Build a verifier from configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| AuthError::Http {
                endpoint: config.base_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Build a verifier straight from a base URL string.
    ///
    /// URL validation failures surface as [`AuthError::Config`].
    pub fn from_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, AuthError> {
        let config = ProviderConfig::new(base_url)?.with_timeout_secs(timeout_secs);
        Self::new(config)
    }

    /// The configured provider base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        let endpoint = format!("{}{}", self.base_url, TOKEN_ENDPOINT);

        let resp = self
            .client
            .get(&endpoint)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    AuthError::Timeout {
                        endpoint: endpoint.clone(),
                    }
                } else {
                    AuthError::Http {
                        endpoint: endpoint.clone(),
                        source,
                    }
                }
            })?;

        // The provider's verdict is in the body, not the status line: an
        // `error` field means rejection, a `user` field means acceptance.
        let body: serde_json::Value =
            resp.json()
                .await
                .map_err(|source| AuthError::MalformedResponse {
                    endpoint: endpoint.clone(),
                    detail: format!("body is not JSON: {source}"),
                })?;

        if let Some(err) = body.get("error") {
            let message = err
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("token rejected by identity provider")
                .to_string();
            tracing::debug!(%endpoint, "identity provider rejected token");
            return Err(AuthError::Rejected { message });
        }

        let user = body
            .get("user")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| AuthError::MalformedResponse {
                endpoint,
                detail: "response has neither `error` nor `user`".to_string(),
            })?;

        Ok(Identity::new(&self.base_url, user))
    }
}
