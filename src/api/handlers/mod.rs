//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod cities;
pub mod health;
pub mod locations;
pub mod titled;
pub mod users;
