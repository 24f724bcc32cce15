use tracing::{debug, error, warn};

use crate::error::{AppResult, ErrorCode};

/// Outcome of every repository operation.
///
/// Exactly one variant is populated. A single-row lookup that finds nothing
/// is `Success(None)`, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult<T> {
    Success(T),
    Error(ErrorCode),
}

impl<T> ServiceResult<T> {
    /// Classifies an internal result, logging the failure cause.
    ///
    /// The cause is only written to the log; callers see the code alone.
    pub fn from_app_result(result: AppResult<T>, operation: &str) -> Self {
        match result {
            Ok(value) => ServiceResult::Success(value),
            Err(err) => {
                let code = ErrorCode::from(&err);
                match code {
                    ErrorCode::NotFound | ErrorCode::ValidationError => {
                        warn!(operation, code = %code, error = %err, "Repository operation rejected");
                    }
                    _ => {
                        error!(operation, code = %code, error = ?err, "Repository operation failed");
                    }
                }
                ServiceResult::Error(code)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ServiceResult::Error(_))
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ServiceResult::Success(_) => None,
            ServiceResult::Error(code) => Some(*code),
        }
    }

    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ServiceResult::Success(value) => ServiceResult::Success(f(value)),
            ServiceResult::Error(code) => ServiceResult::Error(code),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorCode> {
        match self {
            ServiceResult::Success(value) => Ok(value),
            ServiceResult::Error(code) => Err(code),
        }
    }
}

impl<T> ServiceResult<Option<T>> {
    /// Turns an empty single-row lookup into `Error(NOT_FOUND)`.
    pub fn require(self, entity: &str, id: i32) -> ServiceResult<T> {
        match self {
            ServiceResult::Success(Some(value)) => ServiceResult::Success(value),
            ServiceResult::Success(None) => {
                debug!(entity, id, "Lookup by id found nothing");
                ServiceResult::Error(ErrorCode::NotFound)
            }
            ServiceResult::Error(code) => ServiceResult::Error(code),
        }
    }
}

impl<T> From<Result<T, ErrorCode>> for ServiceResult<T> {
    fn from(result: Result<T, ErrorCode>) -> Self {
        match result {
            Ok(value) => ServiceResult::Success(value),
            Err(code) => ServiceResult::Error(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_from_app_result_success() {
        let result = ServiceResult::from_app_result(Ok(5), "count");
        assert_eq!(result, ServiceResult::Success(5));
        assert!(result.is_success());
        assert_eq!(result.error_code(), None);
    }

    #[test]
    fn test_from_app_result_classifies_error() {
        let result: ServiceResult<i32> = ServiceResult::from_app_result(
            Err(AppError::ConnectionPool {
                source: anyhow::anyhow!("timed out waiting for connection"),
            }),
            "get_all locations",
        );

        assert!(result.is_error());
        assert_eq!(result.error_code(), Some(ErrorCode::DatabaseUnavailable));
    }

    #[test]
    fn test_map_preserves_error() {
        let ok: ServiceResult<i32> = ServiceResult::Success(2);
        assert_eq!(ok.map(|v| v * 10), ServiceResult::Success(20));

        let err: ServiceResult<i32> = ServiceResult::Error(ErrorCode::DatabaseError);
        assert_eq!(err.map(|v| v * 10), ServiceResult::Error(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_require() {
        let found = ServiceResult::Success(Some("Park"));
        assert_eq!(found.require("location", 1), ServiceResult::Success("Park"));

        let missing: ServiceResult<Option<&str>> = ServiceResult::Success(None);
        assert_eq!(
            missing.require("location", 2),
            ServiceResult::Error(ErrorCode::NotFound)
        );

        let failed: ServiceResult<Option<&str>> = ServiceResult::Error(ErrorCode::InternalError);
        assert_eq!(
            failed.require("location", 3),
            ServiceResult::Error(ErrorCode::InternalError)
        );
    }

    #[test]
    fn test_result_round_trip() {
        let from_err: ServiceResult<()> = Err(ErrorCode::NotFound).into();
        assert_eq!(from_err.into_result(), Err(ErrorCode::NotFound));

        let from_ok: ServiceResult<u8> = Ok(1).into();
        assert_eq!(from_ok.into_result(), Ok(1));
    }
}
