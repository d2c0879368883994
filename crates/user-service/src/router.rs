//! Route table for the user service.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health))
        .with_state(state.clone());

    // Home page routes
    let page_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/static/script.js", get(handlers::script))
        .with_state(state.clone());

    // User routes
    let user_routes = Router::new()
        .route(
            "/api/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .with_state(state.users);

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
