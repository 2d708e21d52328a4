use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::interviewer::Interviewer;
use crate::models::user::User;

/// Body of `POST /route`.
///
/// `requirements` is carried through untouched: no scoring rule reads it, but
/// callers already send it and future rules may.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRequest {
    pub user: User,
    #[serde(default)]
    pub requirements: Value,
    pub available_interviewers: Vec<Interviewer>,
}

/// A runner-up entry. The generated label travels as `reason` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub interviewer_id: String,
    pub name: String,
    pub score: f64,
    #[serde(rename = "reason")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResponse {
    pub interviewer_id: String,
    pub reason: String,
    pub score: f64,
    pub confidence: f64,
    pub alternatives: Vec<Alternative>,
}
