mod app_error;
mod database_converter;
mod error_code;
mod service_result;

pub use app_error::{AppError, AppResult, ValidationFieldError};
pub use database_converter::DatabaseErrorConverter;
pub use error_code::ErrorCode;
pub use service_result::ServiceResult;
