//! Web server module for tutorialweb.
//!
//! Provides the application factory (`build_app`), the view handlers
//! for the named routes, static asset serving from the configured
//! directory, and the route listing API.
//!
use std::{
    collections::HashMap,
    path::{Component, Path as FsPath, PathBuf},
    sync::Arc,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{
    config::Settings,
    html::{HELLO_PAGE, home_page},
};

/// Application state shared with every handler
pub(crate) struct AppState {
    pub(crate) settings: Settings,
}

/// A named route registration
#[derive(Serialize, Clone)]
pub struct RouteInfo {
    /// Route name
    pub name: &'static str,
    /// URL pattern the route matches
    pub pattern: &'static str,
}

/// Routing table, also exposed at `/api/routes`
const ROUTES: &[RouteInfo] = &[
    RouteInfo { name: "home", pattern: "/" },
    RouteInfo { name: "hello", pattern: "/hello" },
    RouteInfo { name: "static", pattern: "/static/{*path}" },
    RouteInfo { name: "routes", pattern: "/api/routes" },
];

/// Build the application from settings (public entrypoint used by
/// `main.rs` and the functional tests).
pub fn build_app(settings: Settings) -> Router {
    let state = Arc::new(AppState { settings });

    Router::new()
        .route("/", get(home_view))
        .route("/hello", get(hello_view))
        .route("/static/{*path}", get(serve_static))
        .route("/api/routes", get(list_routes))
        .with_state(state)
}

/// Bind the configured address and serve the application
pub async fn run(settings: Settings) {
    let addr = format!("{}:{}", settings.bind_addr, settings.port);
    let app = build_app(settings);

    let listener = TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Display the home page
async fn home_view(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(home_page(&state.settings.site_name, "Home View"))
}

/// Display the canned hello page
async fn hello_view() -> Html<&'static str> {
    Html(HELLO_PAGE)
}

/// Get the list of registered routes
async fn list_routes() -> Json<Vec<RouteInfo>> {
    Json(ROUTES.to_vec())
}

/// Serve a file from the configured static directory
async fn serve_static(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(full) = resolve_asset(&state.settings.static_dir, &path) else {
        tracing::debug!("rejected static path: {}", path);
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            ([(header::CONTENT_TYPE, content_type_for(&full))], bytes).into_response()
        }
        Err(_) => {
            tracing::debug!("static asset not found: {}", full.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("css", "text/css"),
        ("html", "text/html"),
        ("js", "text/javascript"),
        ("json", "application/json"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("svg", "image/svg+xml"),
        ("ico", "image/x-icon"),
        ("txt", "text/plain"),
        ("woff2", "font/woff2"),
    ])
});

/// Content type for a file by extension
fn content_type_for(path: &FsPath) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|e| MIME_TYPES.get(e).copied())
        .unwrap_or("application/octet-stream")
}

/// Resolve a request path inside the static directory. Anything that
/// would step outside the mount (`..`, absolute components) is refused.
fn resolve_asset(static_dir: &FsPath, request_path: &str) -> Option<PathBuf> {
    let rel = FsPath::new(request_path);
    if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(static_dir.join(rel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_gets_its_content_type() {
        assert_eq!(content_type_for(FsPath::new("app.css")), "text/css");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(
            content_type_for(FsPath::new("archive.tar.zst")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(FsPath::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn nested_asset_paths_resolve_under_the_mount() {
        let full = resolve_asset(FsPath::new("static"), "img/logo.png").unwrap();
        assert_eq!(full, PathBuf::from("static/img/logo.png"));
    }

    #[test]
    fn traversal_is_refused() {
        assert!(resolve_asset(FsPath::new("static"), "../Cargo.toml").is_none());
        assert!(resolve_asset(FsPath::new("static"), "img/../../secret").is_none());
        assert!(resolve_asset(FsPath::new("static"), "/etc/passwd").is_none());
    }
}
