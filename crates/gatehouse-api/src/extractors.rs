//! Request extractors with boundary-mapped rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::ApiError;

/// JSON body extractor whose rejections render the uniform error envelope.
///
/// Wraps [`axum::Json`] and remaps its rejection: a missing or wrong
/// `Content-Type` is [`ApiError::InvalidContentType`], everything else
/// (syntax errors, type mismatches, unreadable bodies) is
/// [`ApiError::JsonParse`].
pub struct Json<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::MissingJsonContentType(err) => {
                    ApiError::InvalidContentType(err.body_text())
                }
                other => ApiError::JsonParse(other.body_text()),
            }),
        }
    }
}
