//! Shared application state.

use std::sync::Arc;

use gatehouse_auth_client::TokenVerifier;

use crate::config::AppConfig;

/// State threaded through the router and middleware.
///
/// Holds no mutable data: configuration is read-only after startup and the
/// verifier is stateless, so no locking is needed across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(config: AppConfig, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            config: Arc::new(config),
            verifier,
        }
    }
}
