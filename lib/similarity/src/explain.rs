//! Explainability for compatibility results
//!
//! Output structures showing how a score was put together, per dimension,
//! plus summary statistics over a ranked match list.

use crate::rank::ScoredCandidate;
use crate::weights::Dimension;
use serde::Serialize;

/// One dimension's part of a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Raw sub-score, 1.0 = identical
    pub similarity: f64,
    /// Configured weight
    pub weight: f64,
    /// Points this dimension adds to the 0..=100 score
    pub contribution: f64,
}

/// A compatibility score with per-dimension contributions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub dimensions: Vec<DimensionScore>,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    /// Dimension that added the most points. Earlier dimensions win ties.
    pub fn top_dimension(&self) -> Option<Dimension> {
        self.dimensions
            .iter()
            .fold(None::<&DimensionScore>, |best, d| match best {
                Some(b) if b.contribution >= d.contribution => Some(b),
                _ => Some(d),
            })
            .map(|d| d.dimension)
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Coarse quality band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub const EXCELLENT_THRESHOLD: f64 = 80.0;
    pub const GOOD_THRESHOLD: f64 = 60.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            ScoreTier::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            ScoreTier::Good
        } else {
            ScoreTier::Fair
        }
    }
}

/// Summary statistics for a ranking request
#[derive(Debug, Clone, Serialize)]
pub struct MatchStats {
    /// Number of eligible candidates that were scored
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    pub avg_score: f64,
    pub best_score: f64,
    /// Dimension that contributed most to the best match
    pub top_contributing_dimension: Option<Dimension>,
}

impl MatchStats {
    /// Compute stats from ranked results (best first)
    pub fn compute(results: &[ScoredCandidate<'_>], candidates_count: usize) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                top_contributing_dimension: None,
            };
        };

        let avg_score = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score: best.score,
            top_contributing_dimension: best.breakdown.top_dimension(),
        }
    }
}
