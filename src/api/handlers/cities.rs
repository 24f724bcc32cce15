//! City request handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::dispatch::Lookup;
use crate::api::doc::CITY_TAG;
use crate::api::dto::{CityQuery, CityRequest, ErrorResponse};
use crate::api::response::{created, deleted};
use crate::error::AppResult;
use crate::models::{City, CityResponse};
use crate::state::AppState;
use crate::utils::validate::{ValidatedId, ValidatedJson, ValidatedQuery};

/// Creates city routes.
///
/// Routes:
/// - GET /cities          - List, by id, by title prefix or by state
/// - POST /cities         - Create city
/// - DELETE /cities       - Delete every city
/// - PUT /cities/{id}     - Replace city
/// - DELETE /cities/{id}  - Delete city
pub fn city_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_cities, create_city, delete_all_cities))
        .routes(routes!(update_city, delete_city))
}

/// Lists cities joined with their state.
#[utoipa::path(
    get,
    path = "/cities",
    tag = CITY_TAG,
    params(CityQuery),
    responses(
        (status = 200, description = "Matching cities; a single object when queried by id", body = Vec<CityResponse>),
        (status = 400, description = "Conflicting or malformed parameters", body = ErrorResponse),
        (status = 404, description = "No city with the given id", body = ErrorResponse)
    )
)]
async fn get_cities(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CityQuery>,
) -> AppResult<Response> {
    let repo = &state.repositories.cities;

    let response = match query.lookup()? {
        Lookup::All { scope } => repo.get_all(scope).await.into_response(),
        Lookup::ById(id) => repo.get_by_id(id).await.require("city", id).into_response(),
        Lookup::ByTitle(prefix) => repo.get_by_title_prefix(&prefix).await.into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/cities",
    tag = CITY_TAG,
    request_body = CityRequest,
    responses(
        (status = 201, description = "City created", body = City),
        (status = 400, description = "Invalid body or unknown state", body = ErrorResponse)
    )
)]
async fn create_city(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CityRequest>,
) -> Response {
    created(state.repositories.cities.insert(payload.into()).await)
}

#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City ID")),
    request_body = CityRequest,
    responses(
        (status = 200, description = "City updated", body = City),
        (status = 404, description = "City not found", body = ErrorResponse)
    )
)]
async fn update_city(
    State(state): State<AppState>,
    ValidatedId(id): ValidatedId,
    ValidatedJson(payload): ValidatedJson<CityRequest>,
) -> Response {
    state
        .repositories
        .cities
        .update(id, payload.into())
        .await
        .into_response()
}

#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 400, description = "City still referenced by locations", body = ErrorResponse)
    )
)]
async fn delete_city(State(state): State<AppState>, ValidatedId(id): ValidatedId) -> Response {
    deleted(state.repositories.cities.delete(id).await)
}

#[utoipa::path(
    delete,
    path = "/cities",
    tag = CITY_TAG,
    responses(
        (status = 204, description = "All cities deleted"),
        (status = 400, description = "Cities still referenced by locations", body = ErrorResponse)
    )
)]
async fn delete_all_cities(State(state): State<AppState>) -> Response {
    deleted(state.repositories.cities.delete_all().await)
}
