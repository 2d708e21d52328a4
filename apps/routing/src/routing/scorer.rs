//! Comprehensive scorer: six factors → one weighted score plus a confidence.

use serde::{Deserialize, Serialize};

use crate::models::interviewer::Interviewer;
use crate::models::user::User;
use crate::routing::features::FeatureVector;
use crate::routing::weights::FeatureWeights;

/// History entries needed before a score is fully trusted.
pub const CONFIDENCE_SATURATION: f64 = 5.0;

/// The auditable unit behind every ranking decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: FeatureVector,
    pub weighted_score: f64,
    pub confidence: f64,
}

/// Grows linearly with observed history, reaching 1.0 at five entries.
pub fn compute_confidence(history_count: usize) -> f64 {
    (history_count as f64 / CONFIDENCE_SATURATION).min(1.0)
}

pub fn calculate_comprehensive_score(
    user: &User,
    interviewer: &Interviewer,
    weights: &FeatureWeights,
) -> ScoreResult {
    let scores = FeatureVector::compute(user, interviewer);
    ScoreResult {
        scores,
        weighted_score: weights.combine(&scores),
        confidence: compute_confidence(user.interview_history.len()),
    }
}
