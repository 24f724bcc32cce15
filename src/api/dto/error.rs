//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorCode, ValidationFieldError};

/// Standard error response format.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "code": "VALIDATION_ERROR",
    "message": "Validation failed for query: at most one of id, title, city_id may be given",
    "request_id": "6f1c2a7e-4a53-4d8b-9b1e-2f0c5e8d7a10"
}))]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    /// Per-field failures when a request body or query violated its rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldErrorDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// One failed validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDetail {
    pub field: String,
    pub message: String,
}

impl From<ValidationFieldError> for FieldErrorDetail {
    fn from(error: ValidationFieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: ErrorCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: Vec<FieldErrorDetail>) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new(ErrorCode::NotFound, "Resource not found")
            .with_request_id("req-1");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": "NOT_FOUND",
                "message": "Resource not found",
                "request_id": "req-1"
            })
        );
    }
}
