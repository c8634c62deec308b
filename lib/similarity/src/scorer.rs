//! Pairwise compatibility scoring
//!
//! The score is a weighted average of six per-dimension sub-scores,
//! scaled to 0..=100:
//!
//! ```text
//! score = (Σ w_d · s_d) / (Σ w_d) · 100
//! ```

use crate::distance::{
    cleanliness_similarity, interest_overlap, language_similarity, sleep_similarity,
    social_similarity, study_similarity, SleepMetric,
};
use crate::explain::{DimensionScore, ScoreBreakdown};
use crate::weights::{Dimension, WeightConfig};
use roomatch_core::{Profile, Result};
use serde::{Deserialize, Serialize};

/// Tunables that change how individual dimensions are compared
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ScorerOptions {
    pub sleep_metric: SleepMetric,
}

/// Scores profile pairs under a validated weight configuration
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    weights: WeightConfig,
    total_weight: f64,
    options: ScorerOptions,
}

impl CompatibilityScorer {
    /// Create a scorer, rejecting all-zero, negative or non-finite weights
    pub fn new(weights: WeightConfig) -> Result<Self> {
        Self::with_options(weights, ScorerOptions::default())
    }

    pub fn with_options(weights: WeightConfig, options: ScorerOptions) -> Result<Self> {
        let total_weight = weights.validate()?;
        Ok(Self {
            weights,
            total_weight,
            options,
        })
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn options(&self) -> &ScorerOptions {
        &self.options
    }

    /// Raw sub-scores in [`Dimension::ALL`] order
    pub fn sub_scores(&self, a: &Profile, b: &Profile) -> [f64; 6] {
        [
            sleep_similarity(a.sleep_hour, b.sleep_hour, self.options.sleep_metric),
            study_similarity(a.study_habit, b.study_habit),
            cleanliness_similarity(a.cleanliness, b.cleanliness),
            social_similarity(a.social_type, b.social_type),
            interest_overlap(&a.interests, &b.interests),
            language_similarity(&a.languages, &b.languages),
        ]
    }

    /// Compatibility of two profiles, symmetric in its arguments
    pub fn score(&self, a: &Profile, b: &Profile) -> f64 {
        let subs = self.sub_scores(a, b);
        let weighted: f64 = Dimension::ALL
            .iter()
            .zip(subs.iter())
            .map(|(d, s)| s * self.weights.get(*d))
            .sum();
        (weighted / self.total_weight) * 100.0
    }

    /// Score with each dimension's contribution spelled out
    pub fn breakdown(&self, a: &Profile, b: &Profile) -> ScoreBreakdown {
        let subs = self.sub_scores(a, b);
        let dimensions = Dimension::ALL
            .iter()
            .zip(subs.iter())
            .map(|(dimension, similarity)| {
                let weight = self.weights.get(*dimension);
                DimensionScore {
                    dimension: *dimension,
                    similarity: *similarity,
                    weight,
                    contribution: similarity * weight / self.total_weight * 100.0,
                }
            })
            .collect();

        ScoreBreakdown {
            score: self.score(a, b),
            dimensions,
        }
    }
}

/// One-shot scoring; validates `weights` on every call
pub fn score(a: &Profile, b: &Profile, weights: &WeightConfig) -> Result<f64> {
    Ok(CompatibilityScorer::new(*weights)?.score(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomatch_core::{Error, SocialType, StudyHabit};

    fn base(id: &str) -> Profile {
        Profile::new(id, "female")
            .with_sleep_hour(24.0)
            .with_wake_hour(8.0)
            .with_study_habit(StudyHabit::Quiet)
            .with_cleanliness(8)
            .with_social_type(SocialType::Introvert)
            .with_interests(["Reading"])
            .with_languages(["English"])
    }

    #[test]
    fn test_interest_difference_scenario() {
        let a = base("a");
        let b = base("b").with_interests(["Reading", "Art"]);

        let s = score(&a, &b, &WeightConfig::default()).unwrap();
        assert!((s - 92.5).abs() < 1e-9, "Expected 92.5, got {}", s);
    }

    #[test]
    fn test_self_score_is_100() {
        let a = base("a")
            .with_study_habit(StudyHabit::Group)
            .with_interests(["Art", "Hiking", "Coding"]);
        let scorer = CompatibilityScorer::new(WeightConfig::uniform(3.0)).unwrap();
        assert_eq!(scorer.score(&a, &a), 100.0);
    }

    #[test]
    fn test_symmetry() {
        let a = base("a").with_sleep_hour(22.0).with_cleanliness(3);
        let b = base("b")
            .with_sleep_hour(27.0)
            .with_study_habit(StudyHabit::Music)
            .with_social_type(SocialType::Extrovert)
            .with_interests(["Reading", "Gaming", "Art"])
            .with_languages(["Spanish"]);

        for weights in [WeightConfig::default(), WeightConfig::uniform(1.0)] {
            let scorer = CompatibilityScorer::new(weights).unwrap();
            assert_eq!(scorer.score(&a, &b), scorer.score(&b, &a));
        }
    }

    #[test]
    fn test_zero_weights_rejected() {
        let a = base("a");
        let result = score(&a, &a, &WeightConfig::uniform(0.0));
        assert!(matches!(result, Err(Error::InvalidWeightConfig(_))));
    }

    #[test]
    fn test_huge_weights_rejected() {
        assert!(matches!(
            CompatibilityScorer::new(WeightConfig::uniform(1e308)),
            Err(Error::InvalidWeightConfig(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = WeightConfig {
            study: -0.1,
            ..WeightConfig::default()
        };
        assert!(matches!(
            CompatibilityScorer::new(weights),
            Err(Error::InvalidWeightConfig(_))
        ));
    }

    #[test]
    fn test_unnormalized_weights_same_score() {
        let a = base("a");
        let b = base("b").with_cleanliness(5).with_study_habit(StudyHabit::Music);
        let w = WeightConfig::default();
        let doubled = WeightConfig {
            sleep: w.sleep * 2.0,
            study: w.study * 2.0,
            cleanliness: w.cleanliness * 2.0,
            social: w.social * 2.0,
            interests: w.interests * 2.0,
            languages: w.languages * 2.0,
        };
        let s1 = score(&a, &b, &w).unwrap();
        let s2 = score(&a, &b, &doubled).unwrap();
        assert!((s1 - s2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_interests_not_an_error() {
        let a = base("a").with_interests(Vec::<String>::new());
        let b = base("b").with_interests(Vec::<String>::new());
        let scorer = CompatibilityScorer::new(WeightConfig::default()).unwrap();
        // Interests term contributes nothing; everything else is identical
        assert!((scorer.score(&a, &b) - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_sleep_mismatch_goes_below_zero_term() {
        let a = base("a").with_sleep_hour(20.0);
        let b = base("b").with_sleep_hour(5.0);
        let weights = WeightConfig {
            sleep: 1.0,
            study: 0.0,
            cleanliness: 0.0,
            social: 0.0,
            interests: 0.0,
            languages: 0.0,
        };
        let s = score(&a, &b, &weights).unwrap();
        assert!(s < 0.0);
    }

    #[test]
    fn test_circular_sleep_option() {
        let a = base("a").with_sleep_hour(23.0);
        let b = base("b").with_sleep_hour(1.0);
        let linear = CompatibilityScorer::new(WeightConfig::default()).unwrap();
        let circular = CompatibilityScorer::with_options(
            WeightConfig::default(),
            ScorerOptions {
                sleep_metric: SleepMetric::Circular,
            },
        )
        .unwrap();
        assert!(circular.score(&a, &b) > linear.score(&a, &b));
        assert_eq!(circular.score(&a, &b), circular.score(&b, &a));
    }

    #[test]
    fn test_breakdown_contributions_sum_to_score() {
        let a = base("a");
        let b = base("b")
            .with_sleep_hour(26.0)
            .with_study_habit(StudyHabit::Music)
            .with_interests(["Reading", "Art"]);
        let scorer = CompatibilityScorer::new(WeightConfig::default()).unwrap();
        let breakdown = scorer.breakdown(&a, &b);

        assert_eq!(breakdown.dimensions.len(), 6);
        let sum: f64 = breakdown.dimensions.iter().map(|d| d.contribution).sum();
        assert!((sum - breakdown.score).abs() < 1e-9);
        assert_eq!(breakdown.get(Dimension::Study).map(|d| d.similarity), Some(0.3));
        assert_eq!(breakdown.get(Dimension::Interests).map(|d| d.similarity), Some(0.5));
    }
}
