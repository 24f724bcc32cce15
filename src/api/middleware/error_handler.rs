//! Error rendering for the API.
//!
//! `AppError` and `ErrorCode` both end up here, so every failure shares one
//! status table and one JSON body shape.

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::current_request_id;
use crate::api::dto::{ErrorResponse, FieldErrorDetail};
use crate::error::{AppError, ErrorCode};

/// Builds the JSON error response for `code`.
///
/// The request ID of the current request is attached when available.
pub fn error_response(code: ErrorCode, message: &str, details: Option<Vec<FieldErrorDetail>>) -> Response {
    let mut body = ErrorResponse::new(code, message);
    if let Some(details) = details {
        body = body.with_details(details);
    }
    if let Some(request_id) = current_request_id() {
        body = body.with_request_id(&request_id);
    }

    (code.status_code(), Json(body)).into_response()
}

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// Client errors echo their message. Store and internal failures are
    /// logged here and answered with the code's generic message only.
    fn into_response(self) -> Response {
        let code = ErrorCode::from(&self);

        match self {
            AppError::NotFound { .. } | AppError::Validation { .. } | AppError::BadRequest { .. } => {
                error_response(code, &self.to_string(), None)
            }
            AppError::ValidationErrors { errors } => {
                let details = errors.into_iter().map(FieldErrorDetail::from).collect();
                error_response(code, code.default_message(), Some(details))
            }
            other => {
                tracing::error!(code = %code, error = ?other, "Request failed");
                error_response(code, code.default_message(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use crate::error::ValidationFieldError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::not_found("city", 9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Resource not found: city with id=9");
        assert!(body.get("request_id").is_none());
    }

    #[tokio::test]
    async fn test_validation_errors_carry_details() {
        let response = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "lat".to_string(),
                message: "Latitude must be between -90 and 90".to_string(),
            }],
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"][0]["field"], "lat");
    }

    #[tokio::test]
    async fn test_pool_failure_hides_cause() {
        let response = AppError::ConnectionPool {
            source: anyhow::anyhow!("password authentication failed for user atlas"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["code"], "DATABASE_UNAVAILABLE");
        assert_eq!(body["message"], "Database connection unavailable");
    }

    #[tokio::test]
    async fn test_constraint_is_database_error() {
        let response = AppError::Constraint {
            constraint: "cities_state_id_fkey".to_string(),
            message: "violates foreign key constraint".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "DATABASE_ERROR");
    }
}
