//! Request ID middleware for access logging.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the request lifecycle, then logs the status and duration once
//! the response is produced. Only installed when `logging.access_log` is set.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID stored in request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost layer so the span covers routing as well as
/// the handler.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Extension, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_request_id_is_available_to_handlers() {
        let router = Router::new()
            .route(
                "/id",
                get(|Extension(id): Extension<RequestId>| async move { id.0.to_string() }),
            )
            .layer(axum::middleware::from_fn(request_id_layer));

        let request = axum::http::Request::builder()
            .uri("/id")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let id = std::str::from_utf8(&bytes).unwrap();
        assert!(Uuid::parse_str(id).is_ok(), "not a uuid: {}", id);
    }
}
