//! Feature calculators — six pure functions scoring one (user, interviewer) pair.
//!
//! Every calculator maps into [0, 1] through a fixed rule table. The tables live
//! here as constants so they can be audited and tested without running the full
//! scoring pipeline.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::interviewer::{Interviewer, Specialization};
use crate::models::user::User;

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// Ordered threshold ladder: the first step whose bound is ≥ the input wins.
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    pub steps: &'static [(f64, f64)],
    pub otherwise: f64,
}

impl Ladder {
    pub fn score(&self, value: f64) -> f64 {
        self.score_scaled(value, 1.0)
    }

    /// Compares `value` against each bound multiplied by `scale`.
    pub fn score_scaled(&self, value: f64, scale: f64) -> f64 {
        self.steps
            .iter()
            .find(|(bound, _)| value <= bound * scale)
            .map(|(_, score)| *score)
            .unwrap_or(self.otherwise)
    }
}

pub const EDUCATION_TIERS: &[(&str, u8)] = &[
    ("High School", 1),
    ("Bachelor", 2),
    ("Master", 3),
    ("PhD", 4),
];
pub const DEFAULT_EDUCATION_TIER: u8 = 2;

/// Years of experience → tier. Anything above the last bound is the top tier.
pub const EXPERIENCE_TIERS: &[(u32, u8)] = &[(3, 1), (7, 2), (12, 3)];
pub const TOP_EXPERIENCE_TIER: u8 = 4;

/// Indexed by absolute tier difference.
pub const TIER_GAP_SCORES: &[f64] = &[1.0, 0.8, 0.6];
pub const WIDE_TIER_GAP_SCORE: f64 = 0.3;

pub const INDUSTRY_SPECIALIZATIONS: &[(&str, &[Specialization])] = &[
    (
        "Technology",
        &[Specialization::Technical, Specialization::General],
    ),
    (
        "Healthcare",
        &[Specialization::Specialist, Specialization::General],
    ),
    (
        "Finance",
        &[Specialization::Specialist, Specialization::General],
    ),
    (
        "Education",
        &[Specialization::Cultural, Specialization::Leadership],
    ),
    (
        "Manufacturing",
        &[Specialization::Technical, Specialization::General],
    ),
];
pub const SPECIALIZATION_ALLOWED: f64 = 1.0;
pub const SPECIALIZATION_GENERALIST: f64 = 0.7;
pub const SPECIALIZATION_MISMATCH: f64 = 0.4;
pub const SPECIALIZATION_UNKNOWN_INDUSTRY: f64 = 0.5;

pub const LANGUAGE_EXACT: f64 = 1.0;
pub const LANGUAGE_ENGLISH_FALLBACK: f64 = 0.7;
pub const LANGUAGE_NONE: f64 = 0.0;

/// currentLoad / maxLoad.
pub const LOAD_LADDER: Ladder = Ladder {
    steps: &[(0.3, 1.0), (0.6, 0.8), (0.8, 0.6)],
    otherwise: 0.3,
};

/// Hourly cost against the user's historical average cost.
pub const COST_LADDER: Ladder = Ladder {
    steps: &[(0.8, 1.0), (1.0, 0.8), (1.2, 0.6)],
    otherwise: 0.3,
};
/// Used when the user has no usable average cost.
pub const COST_NO_SIGNAL: f64 = 0.6;

/// Absolute difference between mean historical rating and interviewer rating.
pub const RATING_LADDER: Ladder = Ladder {
    steps: &[(0.5, 1.0), (1.0, 0.8), (1.5, 0.6)],
    otherwise: 0.4,
};
pub const DEFAULT_USER_RATING: f64 = 3.0;

// ────────────────────────────────────────────────────────────────────────────
// Feature vector
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    LanguageMatch,
    ExperienceMatch,
    SpecializationMatch,
    LoadBalance,
    CostEfficiency,
    RatingMatch,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::LanguageMatch,
        Feature::ExperienceMatch,
        Feature::SpecializationMatch,
        Feature::LoadBalance,
        Feature::CostEfficiency,
        Feature::RatingMatch,
    ];

    #[cfg(test)]
    pub fn name(&self) -> &'static str {
        match self {
            Feature::LanguageMatch => "language_match",
            Feature::ExperienceMatch => "experience_match",
            Feature::SpecializationMatch => "specialization_match",
            Feature::LoadBalance => "load_balance",
            Feature::CostEfficiency => "cost_efficiency",
            Feature::RatingMatch => "rating_match",
        }
    }

    pub fn calculate(&self, user: &User, interviewer: &Interviewer) -> f64 {
        match self {
            Feature::LanguageMatch => calculate_language_match(user, interviewer),
            Feature::ExperienceMatch => calculate_experience_match(user, interviewer),
            Feature::SpecializationMatch => calculate_specialization_match(user, interviewer),
            Feature::LoadBalance => calculate_load_balance(interviewer),
            Feature::CostEfficiency => calculate_cost_efficiency(user, interviewer),
            Feature::RatingMatch => calculate_rating_match(user, interviewer),
        }
    }
}

/// Per-pair similarity values, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub language_match: f64,
    pub experience_match: f64,
    pub specialization_match: f64,
    pub load_balance: f64,
    pub cost_efficiency: f64,
    pub rating_match: f64,
}

impl FeatureVector {
    pub fn compute(user: &User, interviewer: &Interviewer) -> Self {
        Self {
            language_match: Feature::LanguageMatch.calculate(user, interviewer),
            experience_match: Feature::ExperienceMatch.calculate(user, interviewer),
            specialization_match: Feature::SpecializationMatch.calculate(user, interviewer),
            load_balance: Feature::LoadBalance.calculate(user, interviewer),
            cost_efficiency: Feature::CostEfficiency.calculate(user, interviewer),
            rating_match: Feature::RatingMatch.calculate(user, interviewer),
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::LanguageMatch => self.language_match,
            Feature::ExperienceMatch => self.experience_match,
            Feature::SpecializationMatch => self.specialization_match,
            Feature::LoadBalance => self.load_balance,
            Feature::CostEfficiency => self.cost_efficiency,
            Feature::RatingMatch => self.rating_match,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calculators
// ────────────────────────────────────────────────────────────────────────────

pub fn calculate_language_match(user: &User, interviewer: &Interviewer) -> f64 {
    let preferred = user.preferences.preferred_language.to_lowercase();
    let spoken: Vec<String> = interviewer
        .languages
        .iter()
        .map(|l| l.to_lowercase())
        .collect();

    if spoken.contains(&preferred) {
        LANGUAGE_EXACT
    } else if preferred != "english" && spoken.iter().any(|l| l == "english") {
        LANGUAGE_ENGLISH_FALLBACK
    } else {
        LANGUAGE_NONE
    }
}

pub fn education_tier(education: &str) -> u8 {
    EDUCATION_TIERS
        .iter()
        .find(|(level, _)| *level == education)
        .map(|(_, tier)| *tier)
        .unwrap_or(DEFAULT_EDUCATION_TIER)
}

pub fn experience_tier(years: u32) -> u8 {
    EXPERIENCE_TIERS
        .iter()
        .find(|(bound, _)| years <= *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(TOP_EXPERIENCE_TIER)
}

pub fn calculate_experience_match(user: &User, interviewer: &Interviewer) -> f64 {
    let gap = education_tier(&user.education).abs_diff(experience_tier(interviewer.experience));
    TIER_GAP_SCORES
        .get(gap as usize)
        .copied()
        .unwrap_or(WIDE_TIER_GAP_SCORE)
}

pub fn allowed_specializations(industry: &str) -> Option<&'static [Specialization]> {
    INDUSTRY_SPECIALIZATIONS
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, allowed)| *allowed)
}

pub fn calculate_specialization_match(user: &User, interviewer: &Interviewer) -> f64 {
    let Some(allowed) = allowed_specializations(&user.industry) else {
        return SPECIALIZATION_UNKNOWN_INDUSTRY;
    };

    if allowed.contains(&interviewer.specialization) {
        SPECIALIZATION_ALLOWED
    } else if interviewer.specialization == Specialization::General {
        SPECIALIZATION_GENERALIST
    } else {
        SPECIALIZATION_MISMATCH
    }
}

/// A non-positive `max_load` is a bad interviewer record, not a reason to
/// divide by zero: it gets the lowest load score and ranking carries on.
pub fn calculate_load_balance(interviewer: &Interviewer) -> f64 {
    if interviewer.max_load <= 0 {
        warn!(
            interviewer_id = %interviewer.id,
            max_load = interviewer.max_load,
            "Non-positive max load; scoring as fully loaded"
        );
        return LOAD_LADDER.otherwise;
    }
    let ratio = f64::from(interviewer.current_load) / f64::from(interviewer.max_load);
    LOAD_LADDER.score(ratio)
}

pub fn calculate_cost_efficiency(user: &User, interviewer: &Interviewer) -> f64 {
    match user.metadata.average_interview_cost {
        Some(avg) if avg.is_finite() && avg > 0.0 => {
            COST_LADDER.score_scaled(interviewer.cost_per_hour, avg)
        }
        _ => COST_NO_SIGNAL,
    }
}

pub fn mean_user_rating(user: &User) -> f64 {
    if user.interview_history.is_empty() {
        return DEFAULT_USER_RATING;
    }
    let total: f64 = user.interview_history.iter().map(|i| i.rating).sum();
    total / user.interview_history.len() as f64
}

pub fn calculate_rating_match(user: &User, interviewer: &Interviewer) -> f64 {
    RATING_LADDER.score((mean_user_rating(user) - interviewer.rating).abs())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
