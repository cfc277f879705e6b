//! # Authorization Gate
//!
//! Middleware stage that validates the caller's bearer token against the
//! remote identity provider before the wrapped handler runs.
//!
//! On success the derived [`Identity`] is inserted into request extensions
//! so handlers receive it as an explicit value (`Extension<Identity>`)
//! instead of reading ambient session state. On any failure the typed
//! [`ApiError`] propagates to the boundary mapping in [`crate::error`] and
//! the inner handler never executes.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the bearer token.
const AUTH_HEADER: &str = "Authorization";

/// Require a valid service token on the request.
///
/// Applied with `MethodRouter::route_layer` to the handlers that need an
/// authenticated caller, so the gate only runs once the method has
/// dispatched; disallowed methods, unknown paths, and the root listing
/// never touch the provider.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingHeader(AUTH_HEADER))?
        .to_owned();

    // One provider round trip per request. No caching, no retry: a stale
    // or revoked token is caught on its next use.
    let identity = state.verifier.verify_token(&token).await?;
    tracing::debug!(user = %identity.user, "token accepted");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
