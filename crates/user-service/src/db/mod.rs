//! Database module for the user service.
//!
//! This module provides database connectivity, schema migrations, models,
//! and queries for SQLite using SQLx.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;

pub use migrations::apply_migrations;
pub use pool::{create_pool, DbPool};
