//! Route handlers for the front door.

pub mod v1;

use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;

/// GET / — list the mounted API groups. Informational, unauthenticated.
pub async fn root_index() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "api_v1": {
                "path": "/v1",
                "desc": "API Version 1",
                "example": "GET /v1"
            }
        }
    }))
}

/// Fallback for unknown routes: 404 with the bare envelope.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
