//! User API handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::db::models::{CreateUserRequest, CreateUserResponse, User};
use crate::error::AppResult;
use crate::services::UserService;

/// List all users.
///
/// `GET /api/users`
///
/// # Response
///
/// ```json
/// [
///   {"id": 1, "username": "alice", "email": "a@x.com"}
/// ]
/// ```
pub async fn list(State(service): State<UserService>) -> AppResult<Json<Vec<User>>> {
    let users = service.list().await?;
    Ok(Json(users))
}

/// Create a new user.
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {"username": "alice", "email": "a@x.com"}
/// ```
///
/// # Response
///
/// `201 Created`:
/// ```json
/// {"message": "User created successfully"}
/// ```
///
/// A body that is not JSON, or that lacks `username` or `email`, is
/// rejected with `400 Bad Request` before anything is stored.
pub async fn create(
    State(service): State<UserService>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let Json(request) = payload?;
    let response = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
