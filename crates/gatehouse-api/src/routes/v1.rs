//! # API Version 1
//!
//! The versioned API group mounted under `/v1`. The group index is open;
//! everything else requires a valid service token. The authorization gate
//! is attached per method router, so method dispatch settles first: a
//! disallowed method on a gated path is a 405 without any header check or
//! provider round trip, and unknown paths fall through to the global 404.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{json, Value};

use gatehouse_auth_client::Identity;

use crate::auth;
use crate::extractors;
use crate::state::AppState;

/// Build the v1 router.
pub fn router(state: AppState) -> Router {
    let gate = from_fn_with_state(state, auth::require_token);

    Router::new()
        .route("/v1", get(index))
        .route("/v1/whoami", get(whoami).route_layer(gate.clone()))
        .route("/v1/echo", post(echo).route_layer(gate))
}

/// GET /v1 — list the endpoints in this group. Informational.
async fn index() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "whoami": {
                "path": "/v1/whoami",
                "desc": "Identity of the calling service",
                "example": "GET /v1/whoami"
            },
            "echo": {
                "path": "/v1/echo",
                "desc": "Echo a JSON document back",
                "example": "POST /v1/echo"
            }
        }
    }))
}

/// GET /v1/whoami — the identity derived by the authorization gate.
async fn whoami(Extension(identity): Extension<Identity>) -> Json<Value> {
    Json(json!({
        "user": identity.user,
        "token_id": identity.session_key
    }))
}

/// POST /v1/echo — accept a JSON document and return it unchanged.
async fn echo(
    Extension(identity): Extension<Identity>,
    extractors::Json(body): extractors::Json<Value>,
) -> Json<Value> {
    Json(json!({
        "user": identity.user,
        "echo": body
    }))
}
