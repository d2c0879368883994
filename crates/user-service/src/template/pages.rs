//! HTML page rendering using minijinja.

use minijinja::{context, Environment};

use crate::error::AppResult;

/// Name of the home page template.
pub const INDEX_TEMPLATE: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../../templates/index.html");

/// Script loaded by the home page.
pub const PAGE_SCRIPT: &str = include_str!("../../static/script.js");

/// Renderer for the server's HTML pages.
///
/// Templates are embedded at compile time, so rendering never depends on
/// files next to the binary.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Create a renderer with every page template registered.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;

        Ok(Self { env })
    }

    /// Render the home page.
    pub fn render_index(&self, server_name: &str) -> AppResult<String> {
        let tmpl = self.env.get_template(INDEX_TEMPLATE)?;
        let html = tmpl.render(context! {
            server_name => server_name,
            version => env!("CARGO_PKG_VERSION"),
        })?;

        Ok(html)
    }
}
