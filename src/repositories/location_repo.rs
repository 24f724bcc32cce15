//! Location repository for async database operations.
//!
//! Reads join locations through cities to states and come back as
//! [`LocationResponse`] projections; writes return the stored [`Location`].

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, ServiceResult};
use crate::models::{Location, LocationResponse, NewLocation};
use crate::repositories::mapper::{LocationResponseRow, LocationRow, prefix_pattern};
use crate::schema::{cities, locations, states};

#[derive(Clone)]
pub struct LocationRepository {
    pool: AsyncDbPool,
}

impl LocationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a location and returns the stored row.
    pub async fn insert(&self, new_location: NewLocation) -> ServiceResult<Location> {
        ServiceResult::from_app_result(self.try_insert(new_location).await, "insert location")
    }

    /// Lists every location, optionally restricted to one city, ordered by id.
    pub async fn get_all(&self, city_id: Option<i32>) -> ServiceResult<Vec<LocationResponse>> {
        ServiceResult::from_app_result(self.try_get_all(city_id).await, "list locations")
    }

    /// Looks a location up by id. A missing row is `Success(None)`.
    pub async fn get_by_id(&self, location_id: i32) -> ServiceResult<Option<LocationResponse>> {
        ServiceResult::from_app_result(
            self.try_get_by_id(location_id).await,
            "get location by id",
        )
    }

    /// Lists locations whose title starts with `prefix`, ordered by id.
    pub async fn get_by_title_prefix(&self, prefix: &str) -> ServiceResult<Vec<LocationResponse>> {
        ServiceResult::from_app_result(
            self.try_get_by_title_prefix(prefix).await,
            "get locations by title prefix",
        )
    }

    /// Overwrites every mutable column of a location.
    pub async fn update(
        &self,
        location_id: i32,
        new_location: NewLocation,
    ) -> ServiceResult<Location> {
        ServiceResult::from_app_result(
            self.try_update(location_id, new_location).await,
            "update location",
        )
    }

    /// Deletes one location, returning the number of rows removed.
    pub async fn delete(&self, location_id: i32) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete(location_id).await, "delete location")
    }

    pub async fn delete_all(&self) -> ServiceResult<usize> {
        ServiceResult::from_app_result(self.try_delete_all().await, "delete all locations")
    }

    async fn try_insert(&self, new_location: NewLocation) -> AppResult<Location> {
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(locations::table)
            .values(&new_location)
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(row.into())
    }

    async fn try_get_all(&self, city_id: Option<i32>) -> AppResult<Vec<LocationResponse>> {
        let mut conn = self.pool.get().await?;

        let mut query = locations::table
            .inner_join(cities::table.inner_join(states::table))
            .select(LocationResponseRow::as_select())
            .order(locations::id.asc())
            .into_boxed();
        if let Some(city) = city_id {
            query = query.filter(locations::city_id.eq(city));
        }

        let rows = query.load(&mut conn).await?;
        Ok(rows.into_iter().map(LocationResponse::from).collect())
    }

    async fn try_get_by_id(&self, location_id: i32) -> AppResult<Option<LocationResponse>> {
        let mut conn = self.pool.get().await?;

        let row = locations::table
            .inner_join(cities::table.inner_join(states::table))
            .filter(locations::id.eq(location_id))
            .select(LocationResponseRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(row.map(LocationResponse::from))
    }

    async fn try_get_by_title_prefix(&self, prefix: &str) -> AppResult<Vec<LocationResponse>> {
        let pattern = prefix_pattern("title", prefix)?;
        let mut conn = self.pool.get().await?;

        let rows = locations::table
            .inner_join(cities::table.inner_join(states::table))
            .filter(locations::title.like(pattern))
            .select(LocationResponseRow::as_select())
            .order(locations::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(LocationResponse::from).collect())
    }

    async fn try_update(&self, location_id: i32, new_location: NewLocation) -> AppResult<Location> {
        let mut conn = self.pool.get().await?;

        diesel::update(locations::table.find(location_id))
            .set(&new_location)
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?
            .map(Location::from)
            .ok_or_else(|| AppError::not_found("location", location_id))
    }

    async fn try_delete(&self, location_id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(locations::table.find(location_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    async fn try_delete_all(&self) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(locations::table).execute(&mut conn).await?;
        Ok(deleted)
    }
}
