//! User CRUD request handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::dispatch::Lookup;
use crate::api::doc::USER_TAG;
use crate::api::dto::{ErrorResponse, UserQuery, UserRequest};
use crate::api::response::{created, deleted};
use crate::error::AppResult;
use crate::models::User;
use crate::state::AppState;
use crate::utils::validate::{ValidatedId, ValidatedJson, ValidatedQuery};

/// Creates user-related routes.
///
/// Routes:
/// - GET /users          - List, by id or by username prefix (`title`)
/// - POST /users         - Create a new user
/// - DELETE /users       - Delete every user
/// - PUT /users/{id}     - Replace user
/// - DELETE /users/{id}  - Delete user
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_users, create_user, delete_all_users))
        .routes(routes!(update_user, delete_user))
}

/// GET /users
///
/// `id` and `title` are mutually exclusive; `title` matches the username
/// and may also be sent as `username`.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "Matching users; a single object when queried by id", body = Vec<User>),
        (status = 400, description = "Conflicting or malformed parameters", body = ErrorResponse),
        (status = 404, description = "No user with the given id", body = ErrorResponse)
    )
)]
async fn get_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Response> {
    let repo = &state.repositories.users;

    let response = match query.lookup()? {
        Lookup::All { .. } => repo.get_all().await.into_response(),
        Lookup::ById(id) => repo.get_by_id(id).await.require("user", id).into_response(),
        Lookup::ByTitle(prefix) => repo.get_by_title_prefix(&prefix).await.into_response(),
    };
    Ok(response)
}

/// POST /users
///
/// The email must be a valid address; a duplicate email is a `DATABASE_ERROR`.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid body or duplicate email", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Response {
    created(state.repositories.users.insert(payload.into()).await)
}

/// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    ValidatedId(id): ValidatedId,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Response {
    state
        .repositories
        .users
        .update(id, payload.into())
        .await
        .into_response()
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted")
    )
)]
async fn delete_user(State(state): State<AppState>, ValidatedId(id): ValidatedId) -> Response {
    deleted(state.repositories.users.delete(id).await)
}

/// DELETE /users
#[utoipa::path(
    delete,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 204, description = "All users deleted")
    )
)]
async fn delete_all_users(State(state): State<AppState>) -> Response {
    deleted(state.repositories.users.delete_all().await)
}
