use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the scoring engine itself.
#[derive(Debug, Error, PartialEq)]
pub enum RoutingError {
    #[error("No available interviewers")]
    NoCandidates,

    #[error("Scoring failed for interviewer {interviewer_id}: {detail}")]
    Computation {
        interviewer_id: String,
        detail: String,
    },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Routing error: {0}")]
    Routing(String),
}

impl From<RoutingError> for AppError {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::NoCandidates => AppError::Validation(err.to_string()),
            RoutingError::Computation { .. } => AppError::Routing(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Routing(msg) => {
                tracing::error!("Error in routing: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ROUTING_ERROR",
                    "Routing could not be computed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Panic handler for `CatchPanicLayer`: answers with the same error body as
/// every other failure instead of the layer's default plain message.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Routing(format!("handler panicked: {detail}")).into_response()
}
