//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user`, `city`, `location`, `title` - query parameters and request bodies
//! - `error` - Common error response DTOs
//! - `health` - Health probe responses

mod city;
mod error;
mod health;
mod location;
mod title;
mod user;

pub use city::{CityQuery, CityRequest};
pub use error::{ErrorResponse, FieldErrorDetail};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use location::{LocationQuery, LocationRequest};
pub use title::{TitleQuery, TitleRequest};
pub use user::{UserQuery, UserRequest};
