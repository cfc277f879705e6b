//! # gatehouse-api — Token-Gated HTTP Front Door
//!
//! Minimal HTTP service that validates incoming bearer tokens against a
//! remote identity provider and dispatches to a single versioned API group,
//! with centralized JSON error responses.
//!
//! ## API Surface
//!
//! | Path | Module | Auth |
//! |------------------|---------------------|------|
//! | `GET /`          | [`routes`]          | open |
//! | `GET /v1`        | [`routes::v1`]      | open |
//! | `GET /v1/whoami` | [`routes::v1`]      | gated |
//! | `POST /v1/echo`  | [`routes::v1`]      | gated |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! NormalizePath → TraceLayer → AccessLog → 405 rewrite → [AuthGate] → Handler
//! ```
//!
//! The auth gate is a per-method `route_layer` on the gated handlers only,
//! so the root listing, the 404 fallback, and method mismatches (405)
//! never touch the identity provider.
//!
//! ## Error Surface
//!
//! Every response is JSON; every failure renders
//! `{"status":"error", "error": ...}` via the total mapping in [`error`].

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware::{from_fn, map_response};
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
///
/// Middleware execution order (outermost → innermost):
///   TraceLayer → AccessLog → 405 rewrite → routes (AuthGate per route)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root_index))
        .merge(routes::v1::router(state))
        .fallback(routes::not_found)
        .layer(map_response(
            middleware::not_allowed::rewrite_method_not_allowed,
        ))
        .layer(from_fn(middleware::access_log::access_log))
        .layer(TraceLayer::new_for_http())
}

/// The full service: the router wrapped in trailing-slash normalization,
/// so `/v1/whoami/` routes like `/v1/whoami`.
///
/// Path normalization must sit outside the router (routing happens before
/// router-level layers run), hence the wrapper type.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
