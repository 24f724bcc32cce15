//! Location DTOs for API requests.

use crate::api::dispatch::{Lookup, ParamNames};
use crate::error::AppResult;
use crate::models::NewLocation;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for `GET /locations`.
///
/// `id`, `title` and `city_id` are mutually exclusive.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    #[param(minimum = 1)]
    pub id: Option<i32>,
    pub title: Option<String>,
    #[validate(range(min = 1, message = "city_id must be at least 1"))]
    #[param(minimum = 1)]
    pub city_id: Option<i32>,
}

impl LocationQuery {
    pub fn lookup(self) -> AppResult<Lookup> {
        Lookup::resolve(
            self.id,
            self.title,
            self.city_id,
            ParamNames::scoped("city_id"),
        )
    }
}

/// Request body for creating or replacing a location.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LocationRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Park")]
    pub title: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    #[schema(example = 39.78)]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    #[schema(example = json!(-89.65))]
    pub lon: f64,
    #[validate(range(min = 1, message = "city_id must be at least 1"))]
    #[schema(minimum = 1)]
    pub city_id: i32,
}

impl From<LocationRequest> for NewLocation {
    fn from(request: LocationRequest) -> Self {
        NewLocation {
            title: request.title,
            lat: request.lat,
            lon: request.lon,
            city_id: request.city_id,
        }
    }
}
