use utoipa::OpenApi;

pub const USER_TAG: &str = "Users";
pub const STATE_TAG: &str = "States";
pub const CITY_TAG: &str = "Cities";
pub const LOCATION_TAG: &str = "Locations";
pub const SELLER_CATEGORY_TAG: &str = "Seller categories";
pub const RESULT_CATEGORY_TAG: &str = "Result categories";
pub const FOOD_CATEGORY_TAG: &str = "Food categories";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atlas",
        description = "Users, places and categories over a relational store",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::FieldErrorDetail,
            crate::error::ErrorCode,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
        (name = STATE_TAG, description = "States, the root of the place hierarchy"),
        (name = CITY_TAG, description = "Cities, each belonging to a state"),
        (name = LOCATION_TAG, description = "Locations, each belonging to a city"),
        (name = SELLER_CATEGORY_TAG, description = "Seller category endpoints"),
        (name = RESULT_CATEGORY_TAG, description = "Result category endpoints"),
        (name = FOOD_CATEGORY_TAG, description = "Food category endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
