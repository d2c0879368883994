//! SQLite migration registry and executor.
//!
//! Migrations are compiled into the binary and applied in order before the
//! server starts listening. The applied version is mirrored to
//! `PRAGMA user_version`, so running the step again is a no-op.

use crate::db::DbPool;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_users",
    sql: include_str!("0001_create_users.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations.
///
/// Pending migrations run inside a single transaction. Returns the schema
/// version after the step.
///
/// # Errors
///
/// Returns `AppError::Config` if the database was written by a newer binary,
/// or `AppError::Database` if a statement fails.
pub async fn apply_migrations(pool: &DbPool) -> AppResult<u32> {
    let current_version = current_version(pool).await?;
    let latest = latest_version();

    if current_version > latest {
        return Err(AppError::Config(format!(
            "Database schema version {} is newer than the latest supported version {}",
            current_version, latest
        )));
    }

    if current_version == latest {
        tracing::debug!(version = current_version, "Database schema is up to date");
        return Ok(current_version);
    }

    let mut tx = pool.begin().await?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        sqlx::raw_sql(migration.sql).execute(&mut *tx).await?;
        sqlx::query(&format!("PRAGMA user_version = {}", migration.version))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(latest)
}

/// Reads the schema version recorded in the database.
pub async fn current_version(pool: &DbPool) -> AppResult<u32> {
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;

    u32::try_from(version)
        .map_err(|_| AppError::Config(format!("Invalid schema version {}", version)))
}
