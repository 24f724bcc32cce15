//! Handlers for the `(id, title)` collections: states and the three
//! category tables.
//!
//! The four collections behave identically, so one macro generates a
//! handler module per collection.

use axum::{
    extract,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::dispatch::Lookup;
use crate::api::doc::{FOOD_CATEGORY_TAG, RESULT_CATEGORY_TAG, SELLER_CATEGORY_TAG, STATE_TAG};
use crate::api::dto::{ErrorResponse, TitleQuery, TitleRequest};
use crate::api::response::{created, deleted};
use crate::error::AppResult;
use crate::models::{Category, State};
use crate::state::AppState;
use crate::utils::validate::{ValidatedId, ValidatedJson, ValidatedQuery};

macro_rules! title_routes {
    (
        $module:ident {
            repository: $repo:ident,
            entity: $entity:ident,
            label: $label:tt,
            tag: $tag:ident,
            path: $path:tt,
            item_path: $item_path:tt,
            handlers: [$get:ident, $create:ident, $update:ident, $delete:ident, $delete_all:ident $(,)?] $(,)?
        }
    ) => {
        pub mod $module {
            use super::*;

            /// Routes: `GET`, `POST` and `DELETE` on the collection,
            /// `PUT` and `DELETE` on a single id.
            pub fn routes() -> OpenApiRouter<AppState> {
                OpenApiRouter::new()
                    .routes(routes!($get, $create, $delete_all))
                    .routes(routes!($update, $delete))
            }

            #[utoipa::path(
                get,
                path = $path,
                tag = $tag,
                params(TitleQuery),
                responses(
                    (status = 200, description = "Matching rows; a single object when queried by id", body = Vec<$entity>),
                    (status = 400, description = "Conflicting or malformed parameters", body = ErrorResponse),
                    (status = 404, description = "No row with the given id", body = ErrorResponse)
                )
            )]
            async fn $get(
                extract::State(state): extract::State<AppState>,
                ValidatedQuery(query): ValidatedQuery<TitleQuery>,
            ) -> AppResult<Response> {
                let repo = &state.repositories.$repo;

                let response = match query.lookup()? {
                    Lookup::All { .. } => repo.get_all().await.into_response(),
                    Lookup::ById(id) => repo.get_by_id(id).await.require($label, id).into_response(),
                    Lookup::ByTitle(prefix) => repo.get_by_title_prefix(&prefix).await.into_response(),
                };
                Ok(response)
            }

            #[utoipa::path(
                post,
                path = $path,
                tag = $tag,
                request_body = TitleRequest,
                responses(
                    (status = 201, description = "Row created", body = $entity),
                    (status = 400, description = "Invalid body", body = ErrorResponse)
                )
            )]
            async fn $create(
                extract::State(state): extract::State<AppState>,
                ValidatedJson(payload): ValidatedJson<TitleRequest>,
            ) -> Response {
                created(state.repositories.$repo.insert(payload.into()).await)
            }

            #[utoipa::path(
                put,
                path = $item_path,
                tag = $tag,
                params(("id" = i32, Path, description = "Row ID")),
                request_body = TitleRequest,
                responses(
                    (status = 200, description = "Row updated", body = $entity),
                    (status = 404, description = "Row not found", body = ErrorResponse)
                )
            )]
            async fn $update(
                extract::State(state): extract::State<AppState>,
                ValidatedId(id): ValidatedId,
                ValidatedJson(payload): ValidatedJson<TitleRequest>,
            ) -> Response {
                state
                    .repositories
                    .$repo
                    .update(id, payload.into())
                    .await
                    .into_response()
            }

            #[utoipa::path(
                delete,
                path = $item_path,
                tag = $tag,
                params(("id" = i32, Path, description = "Row ID")),
                responses(
                    (status = 204, description = "Row deleted"),
                    (status = 400, description = "Row still referenced", body = ErrorResponse)
                )
            )]
            async fn $delete(extract::State(state): extract::State<AppState>, ValidatedId(id): ValidatedId) -> Response {
                deleted(state.repositories.$repo.delete(id).await)
            }

            #[utoipa::path(
                delete,
                path = $path,
                tag = $tag,
                responses(
                    (status = 204, description = "All rows deleted"),
                    (status = 400, description = "Rows still referenced", body = ErrorResponse)
                )
            )]
            async fn $delete_all(extract::State(state): extract::State<AppState>) -> Response {
                deleted(state.repositories.$repo.delete_all().await)
            }
        }
    };
}

title_routes! {
    states {
        repository: states,
        entity: State,
        label: "state",
        tag: STATE_TAG,
        path: "/states",
        item_path: "/states/{id}",
        handlers: [get_states, create_state, update_state, delete_state, delete_all_states],
    }
}

title_routes! {
    seller_categories {
        repository: seller_categories,
        entity: Category,
        label: "seller category",
        tag: SELLER_CATEGORY_TAG,
        path: "/seller-categories",
        item_path: "/seller-categories/{id}",
        handlers: [
            get_seller_categories,
            create_seller_category,
            update_seller_category,
            delete_seller_category,
            delete_all_seller_categories,
        ],
    }
}

title_routes! {
    result_categories {
        repository: result_categories,
        entity: Category,
        label: "result category",
        tag: RESULT_CATEGORY_TAG,
        path: "/result-categories",
        item_path: "/result-categories/{id}",
        handlers: [
            get_result_categories,
            create_result_category,
            update_result_category,
            delete_result_category,
            delete_all_result_categories,
        ],
    }
}

title_routes! {
    food_categories {
        repository: food_categories,
        entity: Category,
        label: "food category",
        tag: FOOD_CATEGORY_TAG,
        path: "/food-categories",
        item_path: "/food-categories/{id}",
        handlers: [
            get_food_categories,
            create_food_category,
            update_food_category,
            delete_food_category,
            delete_all_food_categories,
        ],
    }
}
