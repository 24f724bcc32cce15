use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A city row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub id: i32,
    pub title: String,
    pub state_id: i32,
}

/// NewCity model for inserting new records and overwriting existing ones
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::cities)]
pub struct NewCity {
    pub title: String,
    pub state_id: i32,
}

/// Read-only city shape joined with its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CityResponse {
    pub title: String,
    pub state: String,
}
