//! User-related DTOs for API requests.

use crate::api::dispatch::{Lookup, ParamNames};
use crate::error::AppResult;
use crate::models::NewUser;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for `GET /users`.
///
/// `title` matches the username; `username` is accepted as its alias.
#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Return the single user with this id
    #[validate(range(min = 1, message = "id must be at least 1"))]
    #[param(minimum = 1)]
    pub id: Option<i32>,
    /// Return users whose username starts with this prefix
    #[serde(alias = "username")]
    pub title: Option<String>,
}

impl UserQuery {
    pub fn lookup(self) -> AppResult<Lookup> {
        Lookup::resolve(self.id, self.title, None, ParamNames::TITLE)
    }
}

/// Request body for creating or replacing a user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    #[schema(min_length = 3, max_length = 50)]
    pub username: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(format = "email", max_length = 255)]
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        NewUser {
            username: request.username,
            email: request.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::extract::Query;
    use axum::extract::rejection::QueryRejection;
    use axum::http::Uri;

    #[test]
    fn test_valid_user_request() {
        let request = UserRequest {
            username: "homer".to_string(),
            email: "homer@springfield.example".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = UserRequest {
            username: "homer".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_username_rejected() {
        let request = UserRequest {
            username: "ho".to_string(),
            email: "homer@springfield.example".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    fn parse(query: &str) -> Result<UserQuery, QueryRejection> {
        let uri: Uri = format!("/users?{query}").parse().unwrap();
        Query::<UserQuery>::try_from_uri(&uri).map(|Query(query)| query)
    }

    #[test]
    fn test_title_query_resolves_to_title_lookup() {
        let query = parse("title=hom").unwrap();
        assert_eq!(query.lookup().unwrap(), Lookup::ByTitle("hom".to_string()));
    }

    #[test]
    fn test_username_is_an_alias_for_title() {
        let query = parse("username=hom").unwrap();
        assert_eq!(query.title.as_deref(), Some("hom"));
        assert!(parse("title=hom&username=bar").is_err());
    }

    #[test]
    fn test_id_and_title_conflict() {
        let query = parse("id=1&title=ada").unwrap();
        assert!(matches!(query.lookup(), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        assert!(parse("titel=ada").is_err());
    }
}
