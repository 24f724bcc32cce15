//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::time::Duration;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers::{cities, health, locations, titled, users};
use crate::api::middleware::{logging_middleware, request_id_middleware, timeout_middleware};
use crate::state::AppState;

/// Every documented route, before state and middleware are attached.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(users::user_routes())
        .merge(titled::states::routes())
        .merge(cities::city_routes())
        .merge(locations::location_routes())
        .merge(titled::seller_categories::routes())
        .merge(titled::result_categories::routes())
        .merge(titled::food_categories::routes())
        .merge(health::health_routes())
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. Timeout - bounds handling time by `request_timeout`
/// 4. CORS and compression
///
/// The OpenAPI document is served at `/api-docs/openapi.json` with
/// Swagger UI at `/swagger-ui`.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let (router, api) = api_router().split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn_with_state(request_timeout, timeout_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
