//! Historical adjustment: a secondary multiplier derived from how the user's
//! past interviews went (duration and cost variance).
//!
//! The adjusted score sits in the 80–100% band of the weighted score. It is
//! deliberately not clamped to [0, 1].

use tracing::debug;

use crate::errors::RoutingError;
use crate::models::interviewer::Interviewer;
use crate::models::user::{InterviewHistoryEntry, User};
use crate::routing::scorer::{calculate_comprehensive_score, ScoreResult};
use crate::routing::weights::FeatureWeights;

pub const REFERENCE_DURATION_MINUTES: f64 = 30.0;
pub const DURATION_TOLERANCE_MINUTES: f64 = 60.0;
pub const COST_STDDEV_TOLERANCE: f64 = 100.0;
pub const BASE_SHARE: f64 = 0.8;
pub const ADJUSTMENT_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalAdjustment {
    pub duration_compatibility: f64,
    pub cost_sensitivity: f64,
}

impl HistoricalAdjustment {
    /// `None` when there is no history; the adjustment has no meaning then.
    pub fn from_history(history: &[InterviewHistoryEntry]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let durations: Vec<f64> = history.iter().map(|i| i.duration).collect();
        let costs: Vec<f64> = history.iter().map(|i| i.cost).collect();

        let duration_gap = (mean(&durations) - REFERENCE_DURATION_MINUTES).abs();
        let duration_compatibility = 1.0 - (duration_gap / DURATION_TOLERANCE_MINUTES).min(1.0);
        let cost_sensitivity =
            1.0 - (population_std_dev(&costs) / COST_STDDEV_TOLERANCE).min(1.0);

        Some(Self {
            duration_compatibility,
            cost_sensitivity,
        })
    }

    pub fn factor(&self) -> f64 {
        (self.duration_compatibility + self.cost_sensitivity) / 2.0
    }

    pub fn apply(&self, weighted_score: f64) -> f64 {
        weighted_score * (BASE_SHARE + ADJUSTMENT_SHARE * self.factor())
    }
}

/// A candidate with its complete score. Lives only for one ranking call.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub interviewer: &'a Interviewer,
    pub base_score: ScoreResult,
    pub final_score: f64,
}

/// Scores one candidate and applies the user's historical adjustment.
///
/// Either the whole result is finite and returned, or the candidate fails
/// with a `Computation` error; no half-filled result escapes.
pub fn score_candidate<'a>(
    user: &User,
    interviewer: &'a Interviewer,
    weights: &FeatureWeights,
) -> Result<RankedCandidate<'a>, RoutingError> {
    ensure_finite_inputs(user, interviewer)?;

    let base_score = calculate_comprehensive_score(user, interviewer, weights);

    let final_score = match HistoricalAdjustment::from_history(&user.interview_history) {
        Some(adjustment) => adjustment.apply(base_score.weighted_score),
        None => base_score.weighted_score,
    };

    if !final_score.is_finite() || !base_score.weighted_score.is_finite() {
        return Err(RoutingError::Computation {
            interviewer_id: interviewer.id.clone(),
            detail: format!("non-finite score ({final_score})"),
        });
    }

    debug!(
        interviewer_id = %interviewer.id,
        weighted = base_score.weighted_score,
        final_score,
        confidence = base_score.confidence,
        "Scored candidate"
    );

    Ok(RankedCandidate {
        interviewer,
        base_score,
        final_score,
    })
}

/// `f64::min` swallows NaN, so malformed numbers are rejected up front rather
/// than silently scored.
fn ensure_finite_inputs(user: &User, interviewer: &Interviewer) -> Result<(), RoutingError> {
    let candidate_fields = [
        ("rating", interviewer.rating),
        ("costPerHour", interviewer.cost_per_hour),
    ];
    let history_fields = user.interview_history.iter().flat_map(|entry| {
        [
            ("interviewHistory.duration", entry.duration),
            ("interviewHistory.cost", entry.cost),
            ("interviewHistory.rating", entry.rating),
        ]
    });

    match candidate_fields
        .into_iter()
        .chain(history_fields)
        .find(|(_, value)| !value.is_finite())
    {
        Some((field, value)) => Err(RoutingError::Computation {
            interviewer_id: interviewer.id.clone(),
            detail: format!("{field} is not a finite number ({value})"),
        }),
        None => Ok(()),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
