//! Upper bound on request handling time.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::error_response;
use crate::error::ErrorCode;

/// Answers `503 DATABASE_UNAVAILABLE` when the inner service takes longer
/// than `limit`.
///
/// Handlers only wait on the connection pool and the store, so an expired
/// request is reported as the store being unavailable.
pub async fn timeout_middleware(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Request timed out");
            error_response(ErrorCode::DatabaseUnavailable, "Request timed out", None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    fn app(limit: Duration) -> Router {
        Router::new()
            .route("/fast", get(|| async { "ok" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(middleware::from_fn_with_state(limit, timeout_middleware))
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let response = app(Duration::from_secs(1))
            .oneshot(axum::http::Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let response = app(Duration::from_millis(20))
            .oneshot(axum::http::Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
