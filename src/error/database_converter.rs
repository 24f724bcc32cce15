use crate::error::AppError;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = info.message().to_string();

        match kind {
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation => AppError::Constraint {
                constraint: info
                    .constraint_name()
                    .or_else(|| info.column_name())
                    .unwrap_or("unknown")
                    .to_string(),
                message,
            },
            DatabaseErrorKind::ClosedConnection => AppError::ConnectionPool {
                source: anyhow::Error::msg(message),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn db_error(kind: DatabaseErrorKind, message: &str, constraint: Option<&str>) -> DieselError {
        DieselError::DatabaseError(
            kind,
            Box::new(MockDatabaseErrorInfo {
                message: message.to_string(),
                constraint_name: constraint.map(String::from),
            }),
        )
    }

    #[test]
    fn test_foreign_key_violation_becomes_constraint() {
        let error = db_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"locations\" violates foreign key constraint",
            Some("locations_city_id_fkey"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert location") {
            AppError::Constraint { constraint, message } => {
                assert_eq!(constraint, "locations_city_id_fkey");
                assert!(message.contains("foreign key"));
            }
            other => panic!("expected Constraint, got {:?}", other),
        }
    }

    #[test]
    fn test_unique_violation_without_constraint_name() {
        let error = db_error(DatabaseErrorKind::UniqueViolation, "duplicate key", None);

        match DatabaseErrorConverter::convert_diesel_error(error, "insert user") {
            AppError::Constraint { constraint, .. } => assert_eq!(constraint, "unknown"),
            other => panic!("expected Constraint, got {:?}", other),
        }
    }

    #[test]
    fn test_closed_connection_becomes_connection_pool() {
        let error = db_error(DatabaseErrorKind::ClosedConnection, "server closed the connection", None);

        assert!(matches!(
            DatabaseErrorConverter::convert_diesel_error(error, "select"),
            AppError::ConnectionPool { .. }
        ));
    }

    #[test]
    fn test_not_found_conversion() {
        assert!(matches!(
            DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "select"),
            AppError::NotFound { .. }
        ));
    }

    #[test]
    fn test_other_error_keeps_operation() {
        match DatabaseErrorConverter::convert_diesel_error(DieselError::RollbackTransaction, "update city") {
            AppError::Database { operation, .. } => assert_eq!(operation, "update city"),
            other => panic!("expected Database, got {:?}", other),
        }
    }
}
