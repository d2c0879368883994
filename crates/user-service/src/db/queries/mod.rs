//! Database queries for the user service.
//!
//! This module contains database query functions organized by domain.

pub mod user;
