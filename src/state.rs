//! Application state for Axum web framework.
//!
//! Contains the repositories and resources that are accessible
//! across all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;

/// Application state containing all shared resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Repositories and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// One repository per entity
    pub repositories: Repositories,
    /// Direct access to the database connection pool, used by health checks
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool);
    /// ```
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            repositories: Repositories::new(pool.clone()),
            db_pool: pool,
        }
    }
}
