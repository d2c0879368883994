//! Database models for the user service.
//!
//! This module contains SQLx-compatible model definitions
//! for all database tables.

pub mod user;

pub use user::*;
