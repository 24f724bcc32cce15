//! Repository layer for data access operations.
//!
//! Every public operation returns a [`ServiceResult`](crate::error::ServiceResult);
//! underlying failures are logged and classified at this boundary.

mod city_repo;
mod location_repo;
pub(crate) mod mapper;
mod title_repo;
mod user_repo;

pub use city_repo::CityRepository;
pub use location_repo::LocationRepository;
pub use title_repo::{
    FoodCategoryRepository, ResultCategoryRepository, SellerCategoryRepository, StateRepository,
};
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub states: StateRepository,
    pub cities: CityRepository,
    pub locations: LocationRepository,
    pub seller_categories: SellerCategoryRepository,
    pub result_categories: ResultCategoryRepository,
    pub food_categories: FoodCategoryRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            states: StateRepository::new(pool.clone()),
            cities: CityRepository::new(pool.clone()),
            locations: LocationRepository::new(pool.clone()),
            seller_categories: SellerCategoryRepository::new(pool.clone()),
            result_categories: ResultCategoryRepository::new(pool.clone()),
            food_categories: FoodCategoryRepository::new(pool),
        }
    }
}
