//! Row structs and their mapping into domain types.
//!
//! Rows are crate-private: only repositories see the database shape.
//! Joined projections pull their foreign titles through
//! `select_expression`, so one statement yields the whole response.

use diesel::prelude::*;

use crate::error::{AppError, AppResult};
use crate::models::{Category, City, CityResponse, Location, LocationResponse, State, User};
use crate::schema::{cities, locations, states, users};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Positional `(id, title)` row shared by states and the category tables.
#[derive(Debug, Queryable)]
pub(crate) struct TitleRow {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CityRow {
    pub id: i32,
    pub title: String,
    pub state_id: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CityResponseRow {
    pub title: String,
    #[diesel(select_expression = states::title)]
    #[diesel(select_expression_type = states::title)]
    pub state: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationRow {
    pub id: i32,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub city_id: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationResponseRow {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    #[diesel(select_expression = cities::title)]
    #[diesel(select_expression_type = cities::title)]
    pub city: String,
    #[diesel(select_expression = states::title)]
    #[diesel(select_expression_type = states::title)]
    pub state: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
        }
    }
}

impl From<TitleRow> for State {
    fn from(row: TitleRow) -> Self {
        State {
            id: row.id,
            title: row.title,
        }
    }
}

impl From<TitleRow> for Category {
    fn from(row: TitleRow) -> Self {
        Category {
            id: row.id,
            title: row.title,
        }
    }
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        City {
            id: row.id,
            title: row.title,
            state_id: row.state_id,
        }
    }
}

impl From<CityResponseRow> for CityResponse {
    fn from(row: CityResponseRow) -> Self {
        CityResponse {
            title: row.title,
            state: row.state,
        }
    }
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            title: row.title,
            lat: row.lat,
            lon: row.lon,
            city_id: row.city_id,
        }
    }
}

impl From<LocationResponseRow> for LocationResponse {
    fn from(row: LocationResponseRow) -> Self {
        LocationResponse {
            title: row.title,
            lat: row.lat,
            lon: row.lon,
            city: row.city,
            state: row.state,
        }
    }
}

/// Escapes `LIKE` metacharacters so the input matches literally.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds a `LIKE` pattern matching values that start with `prefix`.
///
/// A blank prefix is rejected rather than widened to match every row.
pub(crate) fn prefix_pattern(field: &str, prefix: &str) -> AppResult<String> {
    if prefix.trim().is_empty() {
        return Err(AppError::validation(field, "prefix must not be blank"));
    }
    let mut pattern = escape_like(prefix);
    pattern.push('%');
    Ok(pattern)
}
