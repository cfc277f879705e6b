//! Post-response access logging.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emit one line per response: method, path, resulting status, in that
/// order. Runs outside the 405 rewrite so it records the status the client
/// actually receives.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    tracing::info!(target: "gatehouse_api::access", "{} {} -> {}", method, path, response.status());
    response
}
