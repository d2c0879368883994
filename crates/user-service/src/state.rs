//! Application state for the user service.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::services::UserService;
use crate::template::PageRenderer;
use std::sync::Arc;

/// Shared application state.
///
/// Owned by the running application and cloned into handlers; there is no
/// process-global database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DbPool,

    /// User operations backed by `db`
    pub users: UserService,

    /// HTML page renderer
    pub pages: Arc<PageRenderer>,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: DbPool, config: AppConfig, pages: PageRenderer) -> Self {
        Self {
            users: UserService::new(db.clone()),
            db,
            pages: Arc::new(pages),
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
