//! Axum route handlers for the Routing API.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::routing::{RoutingRequest, RoutingResponse};
use crate::state::AppState;

/// POST /route
///
/// Ranks the supplied interviewers for the user and returns the best match
/// with up to three alternatives.
pub async fn handle_route(
    State(state): State<AppState>,
    Json(request): Json<RoutingRequest>,
) -> Result<Json<RoutingResponse>, AppError> {
    info!(
        "Routing request for user: {} ({} candidates)",
        request.user.id,
        request.available_interviewers.len()
    );

    let response = state.ranker.rank(
        &request.user,
        &request.requirements,
        &request.available_interviewers,
    )?;

    Ok(Json(response))
}

/// GET /test
pub async fn handle_test() -> Json<Value> {
    Json(json!({
        "message": "Routing router is working!",
        "status": "ok"
    }))
}
