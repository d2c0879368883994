//! HTTP handlers for the user service API.
//!
//! This module contains all route handlers organized by domain.

pub mod health;
pub mod home;
pub mod users;

pub use health::{api_health, health_check};
pub use home::{index, script};
