//! Server binary: read env configuration, wire the real identity-provider
//! verifier, serve.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::EnvFilter;

use gatehouse_api::config::AppConfig;
use gatehouse_api::state::AppState;
use gatehouse_auth_client::HttpTokenVerifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let default_level = if config.development { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let verifier =
        HttpTokenVerifier::from_base_url(&config.auth_base_url, config.auth_timeout_secs)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, Arc::new(verifier));
    let app = gatehouse_api::app(state);

    tracing::info!("gatehouse-api listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
