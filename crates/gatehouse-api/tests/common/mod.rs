//! Shared test fixtures: a counting fake verifier and state builders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gatehouse_api::config::AppConfig;
use gatehouse_api::state::AppState;
use gatehouse_auth_client::{AuthError, Identity, TokenVerifier};

/// Provider base URL baked into identities the fake verifier hands out.
pub const PROVIDER_URL: &str = "https://auth.test";

enum Verdict {
    Accept(&'static str),
    Reject(&'static str),
}

/// Fake verifier with a fixed verdict and an invocation counter, so tests
/// can assert exactly when the gate consults the provider.
pub struct MockVerifier {
    verdict: Verdict,
    calls: AtomicUsize,
}

impl MockVerifier {
    pub fn accepting(user: &'static str) -> Arc<Self> {
        Arc::new(Self {
            verdict: Verdict::Accept(user),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn rejecting(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            verdict: Verdict::Reject(message),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of verification round trips made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify_token(&self, _token: &str) -> Result<Identity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.verdict {
            Verdict::Accept(user) => Ok(Identity::new(PROVIDER_URL, *user)),
            Verdict::Reject(message) => Err(AuthError::Rejected {
                message: (*message).to_string(),
            }),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        auth_base_url: PROVIDER_URL.to_string(),
        port: 8080,
        auth_timeout_secs: 5,
        development: false,
    }
}

pub fn test_state(verifier: Arc<MockVerifier>) -> AppState {
    AppState::new(test_config(), verifier)
}
