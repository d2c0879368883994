//! User database queries.

use crate::db::models::{NewUser, User};
use crate::db::DbPool;
use crate::error::AppResult;

/// List all users in insertion order.
pub async fn list_users(pool: &DbPool) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Insert a new user and return its assigned ID.
pub async fn insert_user(pool: &DbPool, user: &NewUser) -> AppResult<i64> {
    let result: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO users (username, email)
        VALUES (?1, ?2)
        RETURNING id
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
