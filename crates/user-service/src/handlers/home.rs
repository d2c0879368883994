//! Home page handlers.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::error::AppResult;
use crate::state::AppState;
use crate::template::pages::PAGE_SCRIPT;

/// Render the home page.
///
/// `GET /`
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state.pages.render_index(&state.config.server_name)?;
    Ok(Html(html))
}

/// Serve the script used by the home page.
///
/// `GET /static/script.js`
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        PAGE_SCRIPT,
    )
}
