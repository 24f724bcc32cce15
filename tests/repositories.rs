//! Repository tests against a real PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` to run them; without it every test returns early.
//! The tests share one database, so they run serially and start by clearing
//! every table.

use atlas_rs::config::DatabaseConfig;
use atlas_rs::db::{establish_async_connection_pool, run_pending_migrations};
use atlas_rs::error::{ErrorCode, ServiceResult};
use atlas_rs::models::{
    Category, CityResponse, LocationResponse, NewCategory, NewCity, NewLocation, NewState, NewUser,
    State,
};
use atlas_rs::repositories::Repositories;
use serial_test::serial;

async fn repositories() -> Option<Repositories> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return None;
    };

    run_pending_migrations(&url).await.expect("migrations apply");
    let config = DatabaseConfig {
        url,
        max_connections: 4,
        min_connections: 1,
        connection_timeout: 5,
        auto_migrate: false,
    };
    let pool = establish_async_connection_pool(&config).await.expect("pool builds");
    let repos = Repositories::new(pool);

    // Children before parents
    for cleared in [
        repos.locations.delete_all().await,
        repos.cities.delete_all().await,
        repos.states.delete_all().await,
        repos.users.delete_all().await,
        repos.seller_categories.delete_all().await,
        repos.result_categories.delete_all().await,
        repos.food_categories.delete_all().await,
    ] {
        assert!(cleared.is_success(), "table reset failed: {cleared:?}");
    }

    Some(repos)
}

fn success<T: std::fmt::Debug>(result: ServiceResult<T>) -> T {
    match result {
        ServiceResult::Success(value) => value,
        ServiceResult::Error(code) => panic!("expected success, got {code}"),
    }
}

async fn illinois_springfield(repos: &Repositories) -> (State, i32) {
    let state = success(
        repos
            .states
            .insert(NewState {
                title: "Illinois".to_string(),
            })
            .await,
    );
    let city = success(
        repos
            .cities
            .insert(NewCity {
                title: "Springfield".to_string(),
                state_id: state.id,
            })
            .await,
    );
    (state, city.id)
}

fn location(title: &str, city_id: i32) -> NewLocation {
    NewLocation {
        title: title.to_string(),
        lat: 39.8,
        lon: -89.65,
        city_id,
    }
}

#[tokio::test]
#[serial]
async fn test_insert_then_get_by_id_round_trips() {
    let Some(repos) = repositories().await else { return };

    let state = success(
        repos
            .states
            .insert(NewState {
                title: "Oregon".to_string(),
            })
            .await,
    );
    assert_eq!(state.title, "Oregon");
    assert_eq!(repos.states.get_by_id(state.id).await, ServiceResult::Success(Some(state)));
}

#[tokio::test]
#[serial]
async fn test_get_by_id_missing_is_success_none() {
    let Some(repos) = repositories().await else { return };

    assert_eq!(repos.states.get_by_id(i32::MAX).await, ServiceResult::Success(None));
    assert_eq!(repos.locations.get_by_id(i32::MAX).await, ServiceResult::Success(None));
    assert_eq!(repos.users.get_by_id(i32::MAX).await, ServiceResult::Success(None));
}

#[tokio::test]
#[serial]
async fn test_location_round_trips_as_joined_projection() {
    let Some(repos) = repositories().await else { return };
    let (_, city_id) = illinois_springfield(&repos).await;
    let payload = NewLocation {
        title: "Lake".to_string(),
        lat: -12.5,
        lon: 130.75,
        city_id,
    };

    let inserted = success(repos.locations.insert(payload.clone()).await);
    assert_eq!(inserted.title, payload.title);
    assert_eq!(inserted.city_id, city_id);

    let expected = LocationResponse {
        title: payload.title,
        lat: payload.lat,
        lon: payload.lon,
        city: "Springfield".to_string(),
        state: "Illinois".to_string(),
    };
    assert_eq!(
        repos.locations.get_by_id(inserted.id).await,
        ServiceResult::Success(Some(expected))
    );
}

#[tokio::test]
#[serial]
async fn test_city_round_trips_with_state_title() {
    let Some(repos) = repositories().await else { return };
    let (_, city_id) = illinois_springfield(&repos).await;

    assert_eq!(
        repos.cities.get_by_id(city_id).await,
        ServiceResult::Success(Some(CityResponse {
            title: "Springfield".to_string(),
            state: "Illinois".to_string(),
        }))
    );
}

#[tokio::test]
#[serial]
async fn test_user_and_category_round_trip() {
    let Some(repos) = repositories().await else { return };

    let user = success(
        repos
            .users
            .insert(NewUser {
                username: "grace".to_string(),
                email: "grace@example.com".to_string(),
            })
            .await,
    );
    assert_eq!(user.username, "grace");
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(repos.users.get_by_id(user.id).await, ServiceResult::Success(Some(user)));

    let category = success(
        repos
            .food_categories
            .insert(NewCategory {
                title: "Noodles".to_string(),
            })
            .await,
    );
    assert_eq!(category.title, "Noodles");
    assert_eq!(
        repos.food_categories.get_by_id(category.id).await,
        ServiceResult::Success(Some(category))
    );
}

#[tokio::test]
#[serial]
async fn test_springfield_park_projection() {
    let Some(repos) = repositories().await else { return };
    let (_, city_id) = illinois_springfield(&repos).await;
    success(repos.locations.insert(location("Park", city_id)).await);

    let expected = vec![LocationResponse {
        title: "Park".to_string(),
        lat: 39.8,
        lon: -89.65,
        city: "Springfield".to_string(),
        state: "Illinois".to_string(),
    }];
    assert_eq!(
        repos.locations.get_by_title_prefix("Par").await,
        ServiceResult::Success(expected.clone())
    );
    assert_eq!(repos.locations.get_all(None).await, ServiceResult::Success(expected));
}

#[tokio::test]
#[serial]
async fn test_scoped_listing_returns_only_that_parent_in_id_order() {
    let Some(repos) = repositories().await else { return };
    let (state, springfield) = illinois_springfield(&repos).await;
    let chicago = success(
        repos
            .cities
            .insert(NewCity {
                title: "Chicago".to_string(),
                state_id: state.id,
            })
            .await,
    );

    for title in ["Zoo", "Museum", "Library"] {
        success(repos.locations.insert(location(title, springfield)).await);
    }
    success(repos.locations.insert(location("Pier", chicago.id)).await);

    let titles: Vec<String> = success(repos.locations.get_all(Some(springfield)).await)
        .into_iter()
        .map(|l| l.title)
        .collect();
    assert_eq!(titles, ["Zoo", "Museum", "Library"]);

    let cities = success(repos.cities.get_all(Some(state.id)).await);
    assert_eq!(cities.len(), 2);
    assert!(cities.iter().all(|c| c.state == "Illinois"));
}

#[tokio::test]
#[serial]
async fn test_blank_prefix_is_validation_error() {
    let Some(repos) = repositories().await else { return };

    for prefix in ["", "   "] {
        assert_eq!(
            repos.locations.get_by_title_prefix(prefix).await,
            ServiceResult::Error(ErrorCode::ValidationError)
        );
        assert_eq!(
            repos.users.get_by_title_prefix(prefix).await,
            ServiceResult::Error(ErrorCode::ValidationError)
        );
    }
}

#[tokio::test]
#[serial]
async fn test_prefix_wildcards_match_literally() {
    let Some(repos) = repositories().await else { return };
    for title in ["50% off", "50 pct", "a_b", "axb"] {
        success(
            repos
                .seller_categories
                .insert(NewCategory {
                    title: title.to_string(),
                })
                .await,
        );
    }

    let titles = |found: Vec<Category>| found.into_iter().map(|c| c.title).collect::<Vec<_>>();
    assert_eq!(
        titles(success(repos.seller_categories.get_by_title_prefix("50%").await)),
        ["50% off"]
    );
    assert_eq!(
        titles(success(repos.seller_categories.get_by_title_prefix("a_").await)),
        ["a_b"]
    );
}

#[tokio::test]
#[serial]
async fn test_update_replaces_row_and_missing_row_is_not_found() {
    let Some(repos) = repositories().await else { return };
    let (state, city_id) = illinois_springfield(&repos).await;

    let updated = success(
        repos
            .cities
            .update(
                city_id,
                NewCity {
                    title: "Peoria".to_string(),
                    state_id: state.id,
                },
            )
            .await,
    );
    assert_eq!(updated.title, "Peoria");
    assert_eq!(updated.id, city_id);

    assert_eq!(
        repos
            .food_categories
            .update(
                i32::MAX,
                NewCategory {
                    title: "Soup".to_string(),
                },
            )
            .await,
        ServiceResult::Error(ErrorCode::NotFound)
    );
}

#[tokio::test]
#[serial]
async fn test_delete_counts_rows() {
    let Some(repos) = repositories().await else { return };
    let category = success(
        repos
            .result_categories
            .insert(NewCategory {
                title: "Winner".to_string(),
            })
            .await,
    );

    assert_eq!(repos.result_categories.delete(i32::MAX).await, ServiceResult::Success(0));
    assert_eq!(repos.result_categories.delete(category.id).await, ServiceResult::Success(1));
    assert_eq!(repos.result_categories.get_by_id(category.id).await, ServiceResult::Success(None));
}

#[tokio::test]
#[serial]
async fn test_delete_all_then_get_all_is_empty() {
    let Some(repos) = repositories().await else { return };
    let (_, city_id) = illinois_springfield(&repos).await;
    success(repos.locations.insert(location("Park", city_id)).await);
    success(repos.locations.insert(location("Pond", city_id)).await);

    assert_eq!(repos.locations.delete_all().await, ServiceResult::Success(2));
    assert_eq!(repos.locations.get_all(None).await, ServiceResult::Success(vec![]));
}

#[tokio::test]
#[serial]
async fn test_constraint_violations_are_database_errors() {
    let Some(repos) = repositories().await else { return };

    assert_eq!(
        repos
            .cities
            .insert(NewCity {
                title: "Nowhere".to_string(),
                state_id: i32::MAX,
            })
            .await,
        ServiceResult::Error(ErrorCode::DatabaseError)
    );

    let user = NewUser {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
    };
    success(repos.users.insert(user.clone()).await);
    assert_eq!(
        repos.users.insert(user).await,
        ServiceResult::Error(ErrorCode::DatabaseError)
    );
    assert_eq!(success(repos.users.get_by_title_prefix("ad").await).len(), 1);
}
