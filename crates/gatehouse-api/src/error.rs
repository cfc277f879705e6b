//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure that reaches the HTTP boundary resolves to exactly one
//! variant here — there is no catch-all handler elsewhere, so a new error
//! kind must be registered in this enum to reach the wire.
//! Returns the uniform JSON envelope with `status: "error"` and an `error`
//! message. Never exposes internal or upstream detail in responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gatehouse_auth_client::AuthError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform JSON error envelope.
///
/// All error responses use this shape so callers can branch on `status`
/// alone. The `error` field is omitted for bare status markers (404).
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable message, absent for bare 404 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request header is absent or empty (400).
    #[error("{0} header is required")]
    MissingHeader(&'static str),

    /// The request carried an unusable content type (400).
    #[error("{0}")]
    InvalidContentType(String),

    /// The request body could not be parsed as JSON (400).
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The identity provider rejected the token (403).
    /// Carries the provider's message verbatim.
    #[error("{0}")]
    UnauthorizedAccess(String),

    /// Valid path, disallowed method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unknown route (404). Rendered as a bare status marker.
    #[error("not found")]
    NotFound,

    /// The identity provider could not be reached or answered garbage (502).
    /// Detail is logged but not returned to the client.
    #[error("identity provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Internal server error (500). Detail is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingHeader(_) | Self::InvalidContentType(_) | Self::JsonParse(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnauthorizedAccess(_) => StatusCode::FORBIDDEN,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-visible message, or `None` for bare status markers.
    fn client_message(&self) -> Option<String> {
        match self {
            Self::NotFound => None,
            // Never expose upstream/internal detail to clients.
            Self::UpstreamUnavailable(_) => Some("Identity provider unavailable".to_string()),
            Self::Internal(_) => Some("Unexpected server error".to_string()),
            other => Some(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log server-side errors with full detail for operator visibility.
        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::UpstreamUnavailable(_) => {
                tracing::error!(error = %self, "identity provider unavailable")
            }
            _ => {}
        }

        let body = ErrorBody {
            status: "error".to_string(),
            error: self.client_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Map identity-provider client errors to boundary errors.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Rejected { message } => Self::UnauthorizedAccess(message),
            AuthError::Http { .. }
            | AuthError::Timeout { .. }
            | AuthError::MalformedResponse { .. } => Self::UpstreamUnavailable(err.to_string()),
            AuthError::Config(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_status_and_message() {
        let err = ApiError::MissingHeader("Authorization");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.client_message().as_deref(),
            Some("Authorization header is required")
        );
    }

    #[test]
    fn invalid_content_type_status() {
        let err = ApiError::InvalidContentType("expected application/json".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn json_parse_message_prefix() {
        let err = ApiError::JsonParse("expected value at line 1".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.client_message().as_deref(),
            Some("JSON parsing error: expected value at line 1")
        );
    }

    #[test]
    fn unauthorized_passes_provider_message_through() {
        let err = ApiError::UnauthorizedAccess("10020 Invalid token".to_string());
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.client_message().as_deref(), Some("10020 Invalid token"));
    }

    #[test]
    fn method_not_allowed_fixed_message() {
        let err = ApiError::MethodNotAllowed;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.client_message().as_deref(), Some("Method not allowed"));
    }

    #[test]
    fn not_found_has_no_message() {
        let err = ApiError::NotFound;
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), None);
    }

    #[test]
    fn upstream_detail_hidden() {
        let err = ApiError::UpstreamUnavailable("connect ECONNREFUSED 10.0.0.5".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.client_message().as_deref(),
            Some("Identity provider unavailable")
        );
    }

    #[test]
    fn internal_detail_hidden() {
        let err = ApiError::Internal("stack trace goes here".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message().as_deref(), Some("Unexpected server error"));
    }

    #[test]
    fn rejected_converts_to_unauthorized() {
        let err = ApiError::from(AuthError::Rejected {
            message: "token expired".to_string(),
        });
        match &err {
            ApiError::UnauthorizedAccess(msg) => assert_eq!(msg, "token expired"),
            other => panic!("expected UnauthorizedAccess, got: {other:?}"),
        }
    }

    #[test]
    fn provider_timeout_converts_to_upstream() {
        let err = ApiError::from(AuthError::Timeout {
            endpoint: "https://auth.test/api/V2/token".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn verifier_config_error_converts_to_internal() {
        let err = gatehouse_auth_client::HttpTokenVerifier::from_base_url("not a url", 5)
            .unwrap_err();
        let err = ApiError::from(err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message().as_deref(), Some("Unexpected server error"));
    }

    #[test]
    fn malformed_provider_body_converts_to_upstream() {
        let err = ApiError::from(AuthError::MalformedResponse {
            endpoint: "https://auth.test/api/V2/token".to_string(),
            detail: "body is not JSON".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Helper to extract status and raw body from a rendered response.
    async fn response_parts(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn into_response_internal_exact_body() {
        let (status, body) = response_parts(ApiError::Internal("db exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"status":"error","error":"Unexpected server error"}"#);
    }

    #[tokio::test]
    async fn into_response_not_found_bare_envelope() {
        let (status, body) = response_parts(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"status":"error"}"#);
    }

    #[tokio::test]
    async fn into_response_method_not_allowed() {
        let (status, body) = response_parts(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, r#"{"status":"error","error":"Method not allowed"}"#);
    }

    #[tokio::test]
    async fn into_response_forbidden_verbatim_message() {
        let (status, body) =
            response_parts(ApiError::UnauthorizedAccess("bad token".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.status, "error");
        assert_eq!(parsed.error.as_deref(), Some("bad token"));
    }

    #[tokio::test]
    async fn into_response_upstream_hides_detail() {
        let (status, body) =
            response_parts(ApiError::UpstreamUnavailable("ECONNREFUSED".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(
            !body.contains("ECONNREFUSED"),
            "upstream detail must not leak: {body}"
        );
    }
}
