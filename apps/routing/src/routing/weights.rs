use serde::{Deserialize, Serialize};

use crate::routing::features::{Feature, FeatureVector};

/// Fixed factor weights. Never learned, never mutated after startup.
pub const FEATURE_WEIGHTS: FeatureWeights = FeatureWeights {
    language_match: 0.25,
    experience_match: 0.20,
    specialization_match: 0.20,
    load_balance: 0.15,
    cost_efficiency: 0.10,
    rating_match: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub language_match: f64,
    pub experience_match: f64,
    pub specialization_match: f64,
    pub load_balance: f64,
    pub cost_efficiency: f64,
    pub rating_match: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        FEATURE_WEIGHTS
    }
}

impl FeatureWeights {
    pub fn weight(&self, feature: Feature) -> f64 {
        match feature {
            Feature::LanguageMatch => self.language_match,
            Feature::ExperienceMatch => self.experience_match,
            Feature::SpecializationMatch => self.specialization_match,
            Feature::LoadBalance => self.load_balance,
            Feature::CostEfficiency => self.cost_efficiency,
            Feature::RatingMatch => self.rating_match,
        }
    }

    #[cfg(test)]
    pub fn sum(&self) -> f64 {
        Feature::ALL.iter().map(|f| self.weight(*f)).sum()
    }

    /// Σ(value × weight) over all six factors.
    pub fn combine(&self, features: &FeatureVector) -> f64 {
        Feature::ALL
            .iter()
            .map(|f| features.get(*f) * self.weight(*f))
            .sum()
    }
}
