//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL connections.

use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count increment).
/// Structures holding AsyncDbPool can derive Clone without additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn pool_builder(config: &DatabaseConfig) -> bb8::Builder<AsyncDieselConnectionManager<AsyncPgConnection>> {
    Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
}

/// Creates an async database connection pool and checks that the
/// database is reachable.
///
/// # Errors
///
/// - `AppError::ConnectionPool` - If the initial connections cannot be opened
///
/// # Example
///
/// ```ignore
/// let pool = establish_async_connection_pool(&settings.database).await?;
/// let mut conn = pool.get().await?;
/// ```
pub async fn establish_async_connection_pool(config: &DatabaseConfig) -> AppResult<AsyncDbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.clone());
    pool_builder(config)
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::new(e),
        })
}

/// Builds a pool without opening any connection.
///
/// Connections are created on first checkout, so an unreachable database
/// only surfaces as `DATABASE_UNAVAILABLE` on the requests that need it.
pub fn lazy_connection_pool(config: &DatabaseConfig) -> AsyncDbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.clone());
    pool_builder(config).min_idle(Some(0)).build_unchecked(manager)
}

/// Runs `f` on a synchronous connection inside `spawn_blocking`.
///
/// `MigrationHarness` is only implemented for blocking connections.
async fn with_migration_connection<T, F>(database_url: &str, f: F) -> AppResult<T>
where
    F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::new(e),
        })?;
        f(&mut conn)
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

fn migration_error(operation: &str, error: impl std::fmt::Display) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {}", error),
    }
}

/// Applies pending migrations and returns the versions that ran.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    with_migration_connection(database_url, |conn| {
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| migration_error("run pending migrations", e))?;
        Ok(applied.iter().map(|m| m.to_string()).collect())
    })
    .await
}

/// Lists the embedded migrations not yet applied, without running them.
pub async fn pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    with_migration_connection(database_url, |conn| {
        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| migration_error("check pending migrations", e))?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    })
    .await
}

/// Reverts the `steps` most recent migrations, newest first.
///
/// Nothing is reverted when fewer than `steps` migrations are applied.
pub async fn revert_migrations(database_url: &str, steps: u32) -> AppResult<Vec<String>> {
    if steps == 0 {
        return Err(AppError::validation(
            "rollback",
            "Number of rollback steps must be greater than 0",
        ));
    }

    with_migration_connection(database_url, move |conn| {
        let applied = conn
            .applied_migrations()
            .map_err(|e| migration_error("list applied migrations", e))?;

        if applied.len() < steps as usize {
            return Err(AppError::validation(
                "rollback",
                format!(
                    "Cannot roll back {} migrations: only {} applied",
                    steps,
                    applied.len()
                ),
            ));
        }

        (0..steps)
            .map(|_| {
                conn.revert_last_migration(MIGRATIONS)
                    .map(|version| version.to_string())
                    .map_err(|e| migration_error("revert migration", e))
            })
            .collect()
    })
    .await
}
