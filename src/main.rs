//! tutorialweb crate entrypoint.
//!
//! Starts the Tokio runtime, initializes logging and launches the web
//! server. Keep this file minimal — application logic lives in
//! `server`, `config`, and `html`.
//!
use tracing_subscriber::EnvFilter;

use tutorialweb::{config::Settings, server};

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::from_env();
    server::run(settings).await;
}
