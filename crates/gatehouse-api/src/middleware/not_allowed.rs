//! Method-not-allowed envelope rewrite.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Rewrite a 405 into the uniform JSON envelope.
///
/// Method mismatches are produced by the router itself, before any handler
/// runs, with an empty body. Mapping them here keeps the error surface
/// total: every status the service emits carries the envelope.
pub async fn rewrite_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return ApiError::MethodNotAllowed.into_response();
    }
    response
}
