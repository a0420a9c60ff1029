//! tutorialweb: a small web application with named routes, HTML views
//! and static asset serving.

/// Settings loading and defaults
pub mod config;
/// HTML page content and rendering
pub mod html;
/// Application factory, handlers and server bootstrap
pub mod server;
