use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "User Routing Microservice",
        "status": "active"
    }))
}

/// GET /health
/// Returns a status object with the current server time.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": state.config.service_name
    }))
}

/// GET /metrics
/// Read-only view of the scoring configuration. Has no effect on scoring.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "feature_weights": state.ranker.weights(),
        "service_version": env!("CARGO_PKG_VERSION"),
        "ml_enhancements": true,
        "scoring_algorithm": state.ranker.algorithm()
    }))
}
