use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A state; the top of the state → city → location hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct State {
    pub id: i32,
    pub title: String,
}

/// Insert and replace payload for states.
#[derive(Debug, Clone)]
pub struct NewState {
    pub title: String,
}
