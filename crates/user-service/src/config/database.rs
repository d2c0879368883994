//! Database configuration for the SQLite store.

use serde::Deserialize;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::PathBuf;

/// Location of the SQLite file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "site.db";

/// Database configuration loaded from environment variables.
///
/// Only pool tuning is read from the environment, prefixed with `DATABASE_`:
/// - `DATABASE_MAX_CONNECTIONS`: Maximum pooled connections (default: 5)
/// - `DATABASE_ACQUIRE_TIMEOUT`: Acquire timeout in seconds (default: 30)
///
/// The storage engine and file location are fixed; `path` is never read
/// from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file
    #[serde(skip, default = "default_path")]
    pub path: PathBuf,

    /// Maximum connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `DATABASE_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("DATABASE_").from_env::<DatabaseConfig>()
    }

    /// Configuration pointing at an explicit database file.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Get SQLite connection options.
    ///
    /// The file is created on first connect if it does not exist.
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
    }

    /// Get the connection URL string.
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}
