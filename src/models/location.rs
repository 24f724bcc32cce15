use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A location row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: i32,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub city_id: i32,
}

/// NewLocation model for inserting new records and overwriting existing ones
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub city_id: i32,
}

/// Read-only location shape joined through city to state.
///
/// Has no identity of its own and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    /// Title of the owning city
    pub city: String,
    /// Title of the city's state
    pub state: String,
}
