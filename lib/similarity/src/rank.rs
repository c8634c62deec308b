//! Top-K match ranking
//!
//! Filters a population through an eligibility predicate, scores each
//! remaining candidate against the target and keeps the best `k`.

use crate::explain::{ScoreBreakdown, ScoreTier};
use crate::scorer::CompatibilityScorer;
use rayon::prelude::*;
use roomatch_core::{Eligibility, Profile};
use serde::Serialize;
use tracing::debug;

/// A candidate with its compatibility to the target
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<'a> {
    pub profile: &'a Profile,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Ranks candidates for a target profile
#[derive(Debug, Clone)]
pub struct MatchRanker {
    scorer: CompatibilityScorer,
}

impl MatchRanker {
    pub fn new(scorer: CompatibilityScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    /// Eligible candidates in population order. The target itself is
    /// always excluded, whatever the predicate says.
    pub fn eligible<'a, E>(
        &self,
        target: &Profile,
        population: &'a [Profile],
        eligibility: &E,
    ) -> Vec<&'a Profile>
    where
        E: Eligibility + ?Sized,
    {
        population
            .iter()
            .filter(|c| c.id != target.id && eligibility.is_eligible(target, c))
            .collect()
    }

    /// Find the `k` most compatible candidates for `target`.
    ///
    /// Results are sorted by score, best first. Equal scores keep the
    /// population order. Fewer than `k` results come back when fewer
    /// candidates are eligible.
    pub fn find_best_matches<'a, E>(
        &self,
        target: &Profile,
        population: &'a [Profile],
        k: usize,
        eligibility: &E,
    ) -> Vec<ScoredCandidate<'a>>
    where
        E: Eligibility + ?Sized,
    {
        let candidates = self.eligible(target, population, eligibility);
        let candidate_count = candidates.len();

        let mut results = self.score_candidates(target, candidates);

        // Stable: ties keep population order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(k);

        debug!(
            target_id = %target.id,
            population = population.len(),
            eligible = candidate_count,
            returned = results.len(),
            "ranked matches"
        );

        results
    }

    /// Score candidates in parallel, keeping their order
    pub fn score_candidates<'a>(
        &self,
        target: &Profile,
        candidates: Vec<&'a Profile>,
    ) -> Vec<ScoredCandidate<'a>> {
        candidates
            .into_par_iter()
            .map(|profile| {
                let breakdown = self.scorer.breakdown(target, profile);
                ScoredCandidate {
                    profile,
                    score: breakdown.score,
                    breakdown,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::WeightConfig;
    use roomatch_core::{EligibilityCondition, ProfileId, SameGender, SocialType, StudyHabit};

    fn ranker() -> MatchRanker {
        MatchRanker::new(CompatibilityScorer::new(WeightConfig::default()).unwrap())
    }

    fn profile(id: &str, gender: &str, cleanliness: u8) -> Profile {
        Profile::new(id, gender)
            .with_sleep_hour(24.0)
            .with_cleanliness(cleanliness)
            .with_interests(["Reading"])
            .with_languages(["English"])
    }

    fn ids(results: &[ScoredCandidate<'_>]) -> Vec<String> {
        results.iter().map(|r| r.profile.id.to_string()).collect()
    }

    #[test]
    fn test_excludes_self_and_other_gender() {
        let target = profile("t", "female", 8);
        let population = vec![
            target.clone(),
            profile("m1", "male", 8),
            profile("f1", "female", 6),
            profile("f2", "female", 8),
        ];

        let results = ranker().find_best_matches(&target, &population, 10, &SameGender);
        assert_eq!(ids(&results), vec!["f2", "f1"]);
    }

    #[test]
    fn test_self_excluded_even_if_predicate_allows() {
        let target = profile("t", "female", 8);
        let population = vec![target.clone(), profile("x", "male", 1)];

        let results =
            ranker().find_best_matches(&target, &population, 5, &EligibilityCondition::Any);
        assert_eq!(ids(&results), vec!["x"]);
    }

    #[test]
    fn test_ties_keep_population_order() {
        let target = profile("t", "female", 8);
        let population = vec![
            profile("c", "female", 5),
            profile("a", "female", 5),
            profile("b", "female", 5),
            profile("best", "female", 8),
        ];

        let results = ranker().find_best_matches(&target, &population, 4, &SameGender);
        assert_eq!(ids(&results), vec!["best", "c", "a", "b"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let target = profile("t", "female", 8);
        let population: Vec<Profile> = (1..=10u8)
            .map(|i| profile(&format!("f{}", i), "female", i))
            .collect();

        let results = ranker().find_best_matches(&target, &population, 3, &SameGender);
        assert_eq!(results.len(), 3);
        assert_eq!(ids(&results), vec!["f8", "f7", "f9"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_empty_pool_is_empty_result() {
        let target = profile("t", "female", 8);
        let population = vec![target.clone(), profile("m", "male", 8)];

        let results = ranker().find_best_matches(&target, &population, 5, &SameGender);
        assert!(results.is_empty());

        let results = ranker().find_best_matches(&target, &[], 5, &SameGender);
        assert!(results.is_empty());
    }

    #[test]
    fn test_k_zero() {
        let target = profile("t", "female", 8);
        let population = vec![profile("f", "female", 8)];
        assert!(ranker()
            .find_best_matches(&target, &population, 0, &SameGender)
            .is_empty());
    }

    #[test]
    fn test_closure_predicate_and_breakdown() {
        let target = profile("t", "female", 8).with_social_type(SocialType::Extrovert);
        let population = vec![
            profile("q", "female", 8).with_study_habit(StudyHabit::Quiet),
            profile("g", "female", 8).with_study_habit(StudyHabit::Group),
        ];
        let only_group = |_: &Profile, c: &Profile| c.study_habit == StudyHabit::Group;

        let results = ranker().find_best_matches(&target, &population, 5, &only_group);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].profile.id, ProfileId::from("g"));
        assert_eq!(results[0].breakdown.score, results[0].score);
    }
}
