//! User Service Library
//!
//! A small web application exposing a user list/creation API backed by a
//! single SQLite table, a home page, and health check endpoints.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Database connectivity, migrations, models, and queries
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`router`]: Route table
//! - [`services`]: User operations
//! - [`state`]: Shared application state
//! - [`template`]: HTML page rendering
//!
//! ## Example
//!
//! ```ignore
//! use user_service::{
//!     config::{AppConfig, DatabaseConfig},
//!     db::{apply_migrations, create_pool},
//!     router::build_router,
//!     state::AppState,
//!     template::PageRenderer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db_pool = create_pool(&DatabaseConfig::default()).await?;
//!     apply_migrations(&db_pool).await?;
//!     let state = AppState::new(db_pool, AppConfig::default(), PageRenderer::new()?);
//!     let app = build_router(state);
//!     // ... bind and serve
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod result_ext;
pub mod router;
pub mod services;
pub mod state;
pub mod template;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
