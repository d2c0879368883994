//! Page templates module.
//!
//! Provides HTML page rendering using minijinja with templates
//! compiled into the binary.

pub mod pages;

pub use pages::PageRenderer;
