pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::routing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/metrics", get(health::metrics_handler))
        // Routing API
        .route("/test", get(handlers::handle_test))
        .route("/route", post(handlers::handle_route))
        .with_state(state)
}

/// Method/path pairs registered by `build_router`, logged at startup.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/metrics"),
    ("GET", "/test"),
    ("POST", "/route"),
];
