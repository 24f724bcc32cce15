//! City repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, ServiceResult};
use crate::models::{City, CityResponse, NewCity};
use crate::repositories::mapper::{CityResponseRow, CityRow, prefix_pattern};
use crate::schema::{cities, states};

/// City repository holding an async connection pool.
///
/// Reads are joined with `states` and return [`CityResponse`].
#[derive(Clone)]
pub struct CityRepository {
    pool: AsyncDbPool,
}

impl CityRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new_city: NewCity) -> ServiceResult<City> {
        ServiceResult::from_app_result(self.try_insert(new_city).await, "insert city")
    }

    /// Lists every city, optionally restricted to one state, ordered by id.
    pub async fn get_all(&self, state_id: Option<i32>) -> ServiceResult<Vec<CityResponse>> {
        ServiceResult::from_app_result(self.try_get_all(state_id).await, "list cities")
    }

    pub async fn get_by_id(&self, city_id: i32) -> ServiceResult<Option<CityResponse>> {
        ServiceResult::from_app_result(self.try_get_by_id(city_id).await, "get city by id")
    }

    pub async fn get_by_title_prefix(&self, prefix: &str) -> ServiceResult<Vec<CityResponse>> {
        ServiceResult::from_app_result(
            self.try_get_by_title_prefix(prefix).await,
            "get cities by title prefix",
        )
    }

    pub async fn update(&self, city_id: i32, new_city: NewCity) -> ServiceResult<City> {
        ServiceResult::from_app_result(self.try_update(city_id, new_city).await, "update city")
    }

    pub async fn delete(&self, city_id: i32) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete(city_id).await, "delete city")
    }

    pub async fn delete_all(&self) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete_all().await, "delete all cities")
    }

    async fn try_insert(&self, new_city: NewCity) -> AppResult<City> {
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(cities::table)
            .values(&new_city)
            .returning(CityRow::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(row.into())
    }

    async fn try_get_all(&self, state_id: Option<i32>) -> AppResult<Vec<CityResponse>> {
        let mut conn = self.pool.get().await?;

        let mut query = cities::table
            .inner_join(states::table)
            .select(CityResponseRow::as_select())
            .order(cities::id.asc())
            .into_boxed();
        if let Some(state) = state_id {
            query = query.filter(cities::state_id.eq(state));
        }

        let rows = query.load(&mut conn).await?;
        Ok(rows.into_iter().map(CityResponse::from).collect())
    }

    async fn try_get_by_id(&self, city_id: i32) -> AppResult<Option<CityResponse>> {
        let mut conn = self.pool.get().await?;

        let row = cities::table
            .inner_join(states::table)
            .filter(cities::id.eq(city_id))
            .select(CityResponseRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(row.map(CityResponse::from))
    }

    async fn try_get_by_title_prefix(&self, prefix: &str) -> AppResult<Vec<CityResponse>> {
        let pattern = prefix_pattern("title", prefix)?;
        let mut conn = self.pool.get().await?;

        let rows = cities::table
            .inner_join(states::table)
            .filter(cities::title.like(pattern))
            .select(CityResponseRow::as_select())
            .order(cities::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(CityResponse::from).collect())
    }

    async fn try_update(&self, city_id: i32, new_city: NewCity) -> AppResult<City> {
        let mut conn = self.pool.get().await?;

        diesel::update(cities::table.find(city_id))
            .set(&new_city)
            .returning(CityRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?
            .map(City::from)
            .ok_or_else(|| AppError::not_found("city", city_id))
    }

    async fn try_delete(&self, city_id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(cities::table.find(city_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    async fn try_delete_all(&self) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(cities::table).execute(&mut conn).await?;
        Ok(deleted)
    }
}
