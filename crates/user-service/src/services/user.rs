//! User service for listing and registering users.

use crate::db::models::{CreateUserRequest, CreateUserResponse, User};
use crate::db::queries::user as queries;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::result_ext::ResultExt;

/// Service for user operations.
#[derive(Clone)]
pub struct UserService {
    pool: DbPool,
}

impl UserService {
    /// Create a new user service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List every stored user.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        queries::list_users(&self.pool)
            .await
            .log("listing users")
    }

    /// Validate and store a new user.
    ///
    /// Nothing is written unless both `username` and `email` are present.
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let user = request.validate()?;

        let id = queries::insert_user(&self.pool, &user)
            .await
            .log("inserting user")?;

        tracing::info!(id, username = %user.username, "User created");

        Ok(CreateUserResponse::created())
    }
}
