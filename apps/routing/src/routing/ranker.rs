//! Ranker & explainer — orders scored candidates and builds the routing response.
//!
//! `AppState` holds an `Arc<dyn InterviewerRanker>`; `WeightedRanker` is the only
//! backend today.

use serde_json::Value;
use tracing::info;

use crate::errors::RoutingError;
use crate::models::interviewer::Interviewer;
use crate::models::routing::{Alternative, RoutingResponse};
use crate::models::user::User;
use crate::routing::adjustment::{score_candidate, RankedCandidate};
use crate::routing::features::{Feature, FeatureVector};
use crate::routing::weights::{FeatureWeights, FEATURE_WEIGHTS};

pub const SCORING_ALGORITHM: &str = "comprehensive_weighted_scoring";

/// Factors that earn a phrase in the reason, in the order they are reported.
pub const REASON_PHRASES: &[(Feature, &str)] = &[
    (Feature::LanguageMatch, "Excellent language match"),
    (Feature::SpecializationMatch, "Perfect specialization alignment"),
    (Feature::LoadBalance, "Optimal workload distribution"),
    (Feature::CostEfficiency, "Cost-effective option"),
];
/// A factor must be strictly above this to be called out.
pub const REASON_THRESHOLD: f64 = 0.8;
pub const FALLBACK_REASON: &str = "Best overall match";
pub const MAX_ALTERNATIVES: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap ranking backends without touching the handlers.
pub trait InterviewerRanker: Send + Sync {
    /// `requirements` is accepted for interface compatibility and not consulted.
    fn rank(
        &self,
        user: &User,
        requirements: &Value,
        candidates: &[Interviewer],
    ) -> Result<RoutingResponse, RoutingError>;

    fn weights(&self) -> &FeatureWeights;

    fn algorithm(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedRanker
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-weight ranker. Holds no per-request state, so one instance serves
/// every request concurrently.
#[derive(Debug, Clone, Default)]
pub struct WeightedRanker {
    weights: FeatureWeights,
}

impl WeightedRanker {
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self::new(FEATURE_WEIGHTS)
    }
}

impl InterviewerRanker for WeightedRanker {
    fn rank(
        &self,
        user: &User,
        _requirements: &Value,
        candidates: &[Interviewer],
    ) -> Result<RoutingResponse, RoutingError> {
        let ranked = rank_candidates(user, candidates, &self.weights)?;
        let response = build_response(&ranked)?;
        info!(
            user_id = %user.id,
            candidates = candidates.len(),
            interviewer_id = %response.interviewer_id,
            score = response.score,
            "Routed user"
        );
        Ok(response)
    }

    fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    fn algorithm(&self) -> &'static str {
        SCORING_ALGORITHM
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every candidate and sorts by final score, best first.
///
/// The sort is stable: tied candidates keep their input order. An empty list is
/// rejected before anything is scored.
pub fn rank_candidates<'a>(
    user: &User,
    candidates: &'a [Interviewer],
    weights: &FeatureWeights,
) -> Result<Vec<RankedCandidate<'a>>, RoutingError> {
    if candidates.is_empty() {
        return Err(RoutingError::NoCandidates);
    }

    let mut ranked = candidates
        .iter()
        .map(|interviewer| score_candidate(user, interviewer, weights))
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    Ok(ranked)
}

pub fn build_response(ranked: &[RankedCandidate<'_>]) -> Result<RoutingResponse, RoutingError> {
    let (top, rest) = ranked.split_first().ok_or(RoutingError::NoCandidates)?;

    Ok(RoutingResponse {
        interviewer_id: top.interviewer.id.clone(),
        reason: build_reason(&top.base_score.scores),
        score: top.final_score,
        confidence: top.base_score.confidence,
        alternatives: build_alternatives(rest),
    })
}

pub fn build_reason(scores: &FeatureVector) -> String {
    let parts: Vec<&str> = REASON_PHRASES
        .iter()
        .filter(|(feature, _)| scores.get(*feature) > REASON_THRESHOLD)
        .map(|(_, phrase)| *phrase)
        .collect();

    if parts.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        parts.join("; ")
    }
}

/// Up to three runners-up, labelled by their 1-based position among alternatives.
pub fn build_alternatives(runners_up: &[RankedCandidate<'_>]) -> Vec<Alternative> {
    runners_up
        .iter()
        .take(MAX_ALTERNATIVES)
        .enumerate()
        .map(|(i, candidate)| Alternative {
            interviewer_id: candidate.interviewer.id.clone(),
            name: candidate.interviewer.name.clone(),
            score: candidate.final_score,
            label: format!(
                "Alternative {} with {:.2} score",
                i + 1,
                candidate.final_score
            ),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{make_history, make_interviewer, make_user, with_history};
    use crate::models::interviewer::Specialization;
    use serde_json::json;

    fn vector(language: f64, specialization: f64, load: f64, cost: f64) -> FeatureVector {
        FeatureVector {
            language_match: language,
            experience_match: 1.0,
            specialization_match: specialization,
            load_balance: load,
            cost_efficiency: cost,
            rating_match: 1.0,
        }
    }

    fn pool() -> Vec<Interviewer> {
        let mut strong = make_interviewer("strong", &["Spanish"], Specialization::Technical);
        strong.current_load = 1;
        let mut busy = make_interviewer("busy", &["Spanish"], Specialization::Technical);
        busy.current_load = 9;
        let english = make_interviewer("english", &["English"], Specialization::General);
        let cultural = make_interviewer("cultural", &["French"], Specialization::Cultural);
        let leader = make_interviewer("leader", &["German"], Specialization::Leadership);
        vec![busy, english, strong, cultural, leader]
    }

    #[test]
    fn test_reason_from_example_factors() {
        let reason = build_reason(&vector(0.9, 0.85, 0.2, 0.5));
        assert_eq!(reason, "Excellent language match; Perfect specialization alignment");
    }

    #[test]
    fn test_reason_lists_all_phrases_in_fixed_order() {
        let reason = build_reason(&vector(1.0, 1.0, 1.0, 1.0));
        assert_eq!(
            reason,
            "Excellent language match; Perfect specialization alignment; \
             Optimal workload distribution; Cost-effective option"
        );
    }

    #[test]
    fn test_reason_threshold_is_strict() {
        assert_eq!(build_reason(&vector(0.8, 0.8, 0.8, 0.8)), FALLBACK_REASON);
        assert_eq!(build_reason(&vector(0.0, 0.0, 1.0, 0.0)), "Optimal workload distribution");
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let user = make_user("English", "Bachelor", "Technology");
        let err = rank_candidates(&user, &[], &FEATURE_WEIGHTS).unwrap_err();
        assert_eq!(err, RoutingError::NoCandidates);

        let ranker = WeightedRanker::with_default_weights();
        assert_eq!(
            ranker.rank(&user, &json!({}), &[]).unwrap_err(),
            RoutingError::NoCandidates
        );
    }

    #[test]
    fn test_ranking_sorted_descending() {
        let user = make_user("Spanish", "Bachelor", "Technology");
        let candidates = pool();
        let ranked = rank_candidates(&user, &candidates, &FEATURE_WEIGHTS).unwrap();

        assert_eq!(ranked.len(), candidates.len());
        assert_eq!(ranked[0].interviewer.id, "strong");
        for pair in ranked.windows(2) {
            assert!(pair[0].final_score >= pair[1].final_score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let user = make_user("English", "Bachelor", "Technology");
        let candidates: Vec<Interviewer> = ["first", "second", "third", "fourth"]
            .iter()
            .map(|id| make_interviewer(id, &["English"], Specialization::Technical))
            .collect();

        let ranked = rank_candidates(&user, &candidates, &FEATURE_WEIGHTS).unwrap();
        let order: Vec<&str> = ranked.iter().map(|r| r.interviewer.id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third", "fourth"]);

        let response = WeightedRanker::default()
            .rank(&user, &json!({}), &candidates)
            .unwrap();
        assert_eq!(response.interviewer_id, "first");
        assert_eq!(response.alternatives[0].interviewer_id, "second");
    }

    #[test]
    fn test_no_history_user_skips_adjustment_for_every_candidate() {
        let user = make_user("Spanish", "Master", "Healthcare");
        let candidates = pool();
        let ranked = rank_candidates(&user, &candidates, &FEATURE_WEIGHTS).unwrap();
        assert_eq!(ranked.len(), 5);
        for candidate in &ranked {
            assert_eq!(candidate.final_score, candidate.base_score.weighted_score);
            assert_eq!(candidate.base_score.confidence, 0.0);
        }
    }

    #[test]
    fn test_alternatives_take_next_three() {
        let user = make_user("Spanish", "Bachelor", "Technology");
        let response = WeightedRanker::default()
            .rank(&user, &json!({}), &pool())
            .unwrap();

        assert_eq!(response.interviewer_id, "strong");
        assert_eq!(response.alternatives.len(), MAX_ALTERNATIVES);
        for (i, alt) in response.alternatives.iter().enumerate() {
            assert_eq!(
                alt.label,
                format!("Alternative {} with {:.2} score", i + 1, alt.score)
            );
            assert!(alt.score <= response.score);
        }
    }

    #[test]
    fn test_single_candidate_has_no_alternatives() {
        let user = make_user("English", "Bachelor", "Technology");
        let candidates = vec![make_interviewer("solo", &["English"], Specialization::General)];
        let response = WeightedRanker::default()
            .rank(&user, &Value::Null, &candidates)
            .unwrap();
        assert_eq!(response.interviewer_id, "solo");
        assert!(response.alternatives.is_empty());
    }

    #[test]
    fn test_alternative_label_format() {
        let interviewer = make_interviewer("b", &["English"], Specialization::General);
        let user = make_user("English", "Bachelor", "Technology");
        let mut runner_up = score_candidate(&user, &interviewer, &FEATURE_WEIGHTS).unwrap();
        runner_up.final_score = 0.7349;
        let alternatives = build_alternatives(&[runner_up]);
        assert_eq!(alternatives[0].label, "Alternative 1 with 0.73 score");
        assert_eq!(alternatives[0].name, "Interviewer b");
    }

    #[test]
    fn test_requirements_do_not_affect_ranking() {
        let user = with_history(
            make_user("Spanish", "PhD", "Finance"),
            vec![make_history(40.0, 90.0, 4.0), make_history(25.0, 120.0, 5.0)],
        );
        let candidates = pool();
        let ranker = WeightedRanker::default();
        let plain = ranker.rank(&user, &Value::Null, &candidates).unwrap();
        let detailed = ranker
            .rank(&user, &json!({"skills": ["rust"], "urgency": "high"}), &candidates)
            .unwrap();
        assert_eq!(plain, detailed);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let user = with_history(
            make_user("Spanish", "Master", "Technology"),
            vec![make_history(55.0, 60.0, 2.0)],
        );
        let candidates = pool();
        let ranker = WeightedRanker::default();
        let first = ranker.rank(&user, &json!({}), &candidates).unwrap();
        let second = ranker.rank(&user, &json!({}), &candidates).unwrap();
        assert_eq!(first, second);
        assert!((first.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_one_bad_candidate_fails_whole_ranking() {
        let user = make_user("English", "Bachelor", "Technology");
        let mut candidates = pool();
        candidates[3].rating = f64::NAN;
        let err = rank_candidates(&user, &candidates, &FEATURE_WEIGHTS).unwrap_err();
        assert!(matches!(err, RoutingError::Computation { .. }));
    }

    #[test]
    fn test_ranker_exposes_weights_and_algorithm() {
        let ranker = WeightedRanker::default();
        assert_eq!(*ranker.weights(), FEATURE_WEIGHTS);
        assert_eq!(ranker.algorithm(), "comprehensive_weighted_scoring");
    }
}
