//! Service layer for the user service.
//!
//! Services encapsulate business logic and coordinate
//! between handlers and database queries.

pub mod user;

pub use user::UserService;
