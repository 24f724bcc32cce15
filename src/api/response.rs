//! Rendering of repository results as HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::middleware::error_response;
use crate::error::ServiceResult;

/// Renders `result` with `status` on success.
pub fn render<T: Serialize>(result: ServiceResult<T>, status: StatusCode) -> Response {
    match result {
        ServiceResult::Success(data) => (status, Json(data)).into_response(),
        ServiceResult::Error(code) => error_response(code, code.default_message(), None),
    }
}

/// `201 Created` with the stored entity.
pub fn created<T: Serialize>(result: ServiceResult<T>) -> Response {
    render(result, StatusCode::CREATED)
}

/// `204 No Content` once the delete ran, whatever the row count.
pub fn deleted(result: ServiceResult<usize>) -> Response {
    match result {
        ServiceResult::Success(count) => {
            tracing::debug!(rows = count, "Rows deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        ServiceResult::Error(code) => error_response(code, code.default_message(), None),
    }
}

impl<T: Serialize> IntoResponse for ServiceResult<T> {
    fn into_response(self) -> Response {
        render(self, StatusCode::OK)
    }
}
