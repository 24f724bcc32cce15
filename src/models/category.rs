use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A seller, result or food category.
///
/// All three category tables share the `(id, title)` shape, so one type
/// serves them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub title: String,
}

/// Insert and replace payload for categories.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: String,
}
