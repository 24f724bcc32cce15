mod category;
mod city;
mod location;
mod state;
mod user;

pub use category::{Category, NewCategory};
pub use city::{City, CityResponse, NewCity};
pub use location::{Location, LocationResponse, NewLocation};
pub use state::{NewState, State};
pub use user::{NewUser, User};
