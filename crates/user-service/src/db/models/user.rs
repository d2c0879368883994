//! User database model.
//!
//! A user is one registered account: a storage-assigned id plus the
//! username and email supplied at creation. Users are never updated or
//! deleted through the API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

/// Message returned after a user has been stored.
pub const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    /// Row ID assigned by SQLite on insert
    pub id: i64,

    /// Username as submitted
    pub username: String,

    /// Email as submitted
    pub email: String,
}

/// Request body for creating a user.
///
/// Both fields are optional here so that a missing field is reported as a
/// validation error instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Check that every required field is present.
    pub fn validate(self) -> AppResult<NewUser> {
        let username = self.username.ok_or_else(|| missing_field("username"))?;
        let email = self.email.ok_or_else(|| missing_field("email"))?;

        Ok(NewUser { username, email })
    }
}

fn missing_field(name: &str) -> AppError {
    AppError::Validation(format!("Missing required field '{}'", name))
}

/// A validated user ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Response after creating a user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    /// Status message
    pub message: String,
}

impl CreateUserResponse {
    pub fn created() -> Self {
        Self {
            message: USER_CREATED_MESSAGE.to_string(),
        }
    }
}
