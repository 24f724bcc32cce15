//! DTOs shared by states and the category collections.

use crate::api::dispatch::{Lookup, ParamNames};
use crate::error::AppResult;
use crate::models::{NewCategory, NewState};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for collections without a parent scope.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Return the single row with this id
    #[validate(range(min = 1, message = "id must be at least 1"))]
    #[param(minimum = 1)]
    pub id: Option<i32>,
    /// Return rows whose title starts with this prefix
    pub title: Option<String>,
}

impl TitleQuery {
    pub fn lookup(self) -> AppResult<Lookup> {
        Lookup::resolve(self.id, self.title, None, ParamNames::TITLE)
    }
}

/// Request body for creating or replacing a titled row.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct TitleRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Bakery")]
    pub title: String,
}

impl From<TitleRequest> for NewState {
    fn from(request: TitleRequest) -> Self {
        NewState {
            title: request.title,
        }
    }
}

impl From<TitleRequest> for NewCategory {
    fn from(request: TitleRequest) -> Self {
        NewCategory {
            title: request.title,
        }
    }
}
