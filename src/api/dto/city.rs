//! City DTOs for API requests.

use crate::api::dispatch::{Lookup, ParamNames};
use crate::error::AppResult;
use crate::models::NewCity;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for `GET /cities`.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Return the single city with this id
    #[validate(range(min = 1, message = "id must be at least 1"))]
    #[param(minimum = 1)]
    pub id: Option<i32>,
    /// Return cities whose title starts with this prefix
    pub title: Option<String>,
    /// Return the cities of one state
    #[validate(range(min = 1, message = "state_id must be at least 1"))]
    #[param(minimum = 1)]
    pub state_id: Option<i32>,
}

impl CityQuery {
    pub fn lookup(self) -> AppResult<Lookup> {
        Lookup::resolve(
            self.id,
            self.title,
            self.state_id,
            ParamNames::scoped("state_id"),
        )
    }
}

/// Request body for creating or replacing a city.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CityRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Springfield")]
    pub title: String,
    #[validate(range(min = 1, message = "state_id must be at least 1"))]
    #[schema(minimum = 1)]
    pub state_id: i32,
}

impl From<CityRequest> for NewCity {
    fn from(request: CityRequest) -> Self {
        NewCity {
            title: request.title,
            state_id: request.state_id,
        }
    }
}
