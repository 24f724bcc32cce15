use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::AppError;

/// Closed set of failure categories a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Statement rejected by the store: constraint violation or malformed query
    DatabaseError,
    /// No connection could be obtained or the connection dropped
    DatabaseUnavailable,
    NotFound,
    ValidationError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// HTTP status used when this code reaches a response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::DatabaseError => StatusCode::BAD_REQUEST,
            ErrorCode::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Generic, caller-safe message for this code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "The database rejected the operation",
            ErrorCode::DatabaseUnavailable => "Database connection unavailable",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&AppError> for ErrorCode {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::Validation { .. }
            | AppError::ValidationErrors { .. }
            | AppError::BadRequest { .. } => ErrorCode::ValidationError,
            AppError::Constraint { .. }
            | AppError::Database { .. }
            | AppError::Configuration { .. } => ErrorCode::DatabaseError,
            AppError::ConnectionPool { .. } => ErrorCode::DatabaseUnavailable,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::DatabaseUnavailable).unwrap();
        assert_eq!(json, "\"DATABASE_UNAVAILABLE\"");

        let parsed: ErrorCode = serde_json::from_str("\"VALIDATION_ERROR\"").unwrap();
        assert_eq!(parsed, ErrorCode::ValidationError);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for code in [
            ErrorCode::DatabaseError,
            ErrorCode::DatabaseUnavailable,
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::InternalError,
        ] {
            let wire = serde_json::to_string(&code).unwrap();
            assert_eq!(wire.trim_matches('"'), code.to_string());
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ValidationError.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::DatabaseError.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::DatabaseUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_classification() {
        let constraint = AppError::Constraint {
            constraint: "users_email_key".to_string(),
            message: "duplicate key".to_string(),
        };
        assert_eq!(ErrorCode::from(&constraint), ErrorCode::DatabaseError);

        let pool = AppError::ConnectionPool {
            source: anyhow::anyhow!("timed out"),
        };
        assert_eq!(ErrorCode::from(&pool), ErrorCode::DatabaseUnavailable);

        let bad = AppError::BadRequest {
            message: "invalid digit".to_string(),
        };
        assert_eq!(ErrorCode::from(&bad), ErrorCode::ValidationError);

        assert_eq!(
            ErrorCode::from(&AppError::not_found("city", 3)),
            ErrorCode::NotFound
        );
    }
}
