//! Location request handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::dispatch::Lookup;
use crate::api::doc::LOCATION_TAG;
use crate::api::dto::{ErrorResponse, LocationQuery, LocationRequest};
use crate::api::response::{created, deleted};
use crate::error::AppResult;
use crate::models::{Location, LocationResponse};
use crate::state::AppState;
use crate::utils::validate::{ValidatedId, ValidatedJson, ValidatedQuery};

/// Creates location routes.
///
/// Routes:
/// - GET /locations          - List, by id, by title prefix or by city
/// - POST /locations         - Create location
/// - DELETE /locations       - Delete every location
/// - PUT /locations/{id}     - Replace location
/// - DELETE /locations/{id}  - Delete location
pub fn location_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_locations, create_location, delete_all_locations))
        .routes(routes!(update_location, delete_location))
}

/// Lists locations joined with their city and state.
///
/// `id`, `title` and `city_id` are mutually exclusive. A lookup by `id`
/// that matches nothing answers 404.
#[utoipa::path(
    get,
    path = "/locations",
    tag = LOCATION_TAG,
    params(LocationQuery),
    responses(
        (status = 200, description = "Matching locations; a single object when queried by id", body = Vec<LocationResponse>),
        (status = 400, description = "Conflicting or malformed parameters", body = ErrorResponse),
        (status = 404, description = "No location with the given id", body = ErrorResponse),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    )
)]
async fn get_locations(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LocationQuery>,
) -> AppResult<Response> {
    let repo = &state.repositories.locations;

    let response = match query.lookup()? {
        Lookup::All { scope } => repo.get_all(scope).await.into_response(),
        Lookup::ById(id) => repo.get_by_id(id).await.require("location", id).into_response(),
        Lookup::ByTitle(prefix) => repo.get_by_title_prefix(&prefix).await.into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/locations",
    tag = LOCATION_TAG,
    request_body = LocationRequest,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Invalid body or unknown city", body = ErrorResponse)
    )
)]
async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LocationRequest>,
) -> Response {
    created(state.repositories.locations.insert(payload.into()).await)
}

/// Replaces every mutable field of a location.
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 400, description = "Invalid body or unknown city", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse)
    )
)]
async fn update_location(
    State(state): State<AppState>,
    ValidatedId(id): ValidatedId,
    ValidatedJson(payload): ValidatedJson<LocationRequest>,
) -> Response {
    state
        .repositories
        .locations
        .update(id, payload.into())
        .await
        .into_response()
}

/// Deletes a location. Deleting a missing id also answers 204.
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse)
    )
)]
async fn delete_location(State(state): State<AppState>, ValidatedId(id): ValidatedId) -> Response {
    deleted(state.repositories.locations.delete(id).await)
}

#[utoipa::path(
    delete,
    path = "/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 204, description = "All locations deleted"),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    )
)]
async fn delete_all_locations(State(state): State<AppState>) -> Response {
    deleted(state.repositories.locations.delete_all().await)
}
