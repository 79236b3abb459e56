//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::helpers::LinkBuilder;
use crate::server::routes::health_handler;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub links: LinkBuilder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let links = config.link_builder();
        Self {
            config: Arc::new(config),
            links,
        }
    }
}

/// Build the Axum application router
pub fn build_app(config: Config) -> Router {
    tracing::debug!(prefix = %config.prefix, "Building router");

    let app_state = AppState::new(config);

    Router::new()
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
