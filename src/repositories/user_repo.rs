//! User repository for async database operations.
//!
//! Provides CRUD operations for the users table using diesel_async.
//! The title-prefix lookup matches on `username`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, ServiceResult};
use crate::models::{NewUser, User};
use crate::repositories::mapper::{UserRow, prefix_pattern};
use crate::schema::users;

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<UserRepository>`.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// A duplicate email is rejected by the store as `DATABASE_ERROR`.
    pub async fn insert(&self, new_user: NewUser) -> ServiceResult<User> {
        ServiceResult::from_app_result(self.try_insert(new_user).await, "insert user")
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<User>> {
        ServiceResult::from_app_result(self.try_get_all().await, "list users")
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// `Success(Some(User))` if found, `Success(None)` otherwise
    pub async fn get_by_id(&self, user_id: i32) -> ServiceResult<Option<User>> {
        ServiceResult::from_app_result(self.try_get_by_id(user_id).await, "get user by id")
    }

    /// Lists users whose username starts with `prefix`.
    pub async fn get_by_title_prefix(&self, prefix: &str) -> ServiceResult<Vec<User>> {
        ServiceResult::from_app_result(
            self.try_get_by_username_prefix(prefix).await,
            "get users by username prefix",
        )
    }

    pub async fn update(&self, user_id: i32, new_user: NewUser) -> ServiceResult<User> {
        ServiceResult::from_app_result(self.try_update(user_id, new_user).await, "update user")
    }

    /// Deletes a user from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: i32) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete(user_id).await, "delete user")
    }

    pub async fn delete_all(&self) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete_all().await, "delete all users")
    }

    async fn try_insert(&self, new_user: NewUser) -> AppResult<User> {
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(users::table)
            .values(&new_user)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(row.into())
    }

    async fn try_get_all(&self) -> AppResult<Vec<User>> {
        let mut conn = self.pool.get().await?;

        let rows = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn try_get_by_id(&self, user_id: i32) -> AppResult<Option<User>> {
        let mut conn = self.pool.get().await?;

        let row = users::table
            .find(user_id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(row.map(User::from))
    }

    async fn try_get_by_username_prefix(&self, prefix: &str) -> AppResult<Vec<User>> {
        let pattern = prefix_pattern("username", prefix)?;
        let mut conn = self.pool.get().await?;

        let rows = users::table
            .filter(users::username.like(pattern))
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn try_update(&self, user_id: i32, new_user: NewUser) -> AppResult<User> {
        let mut conn = self.pool.get().await?;

        diesel::update(users::table.find(user_id))
            .set(&new_user)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?
            .map(User::from)
            .ok_or_else(|| AppError::not_found("user", user_id))
    }

    async fn try_delete(&self, user_id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(users::table.find(user_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    async fn try_delete_all(&self) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(users::table).execute(&mut conn).await?;
        Ok(deleted)
    }
}
