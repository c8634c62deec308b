//! # roomatch Similarity
//!
//! Weighted compatibility scoring and top-K match ranking for profiles.
//!
//! ## Features
//!
//! - **Weight Configuration**: Declarative per-dimension weights
//! - **Compatibility Scoring**: Symmetric 0..=100 score over six lifestyle dimensions
//! - **Match Ranking**: Eligibility-filtered, stable top-K retrieval
//! - **Explainability**: Per-dimension contribution breakdown for transparency
//!
//! ## Example
//!
//! ```rust
//! use roomatch_core::{Profile, SameGender};
//! use roomatch_similarity::{CompatibilityScorer, MatchRanker, WeightConfig};
//!
//! let me = Profile::new("me", "female").with_interests(["Reading"]);
//! let population = vec![
//!     Profile::new("a", "female").with_interests(["Reading", "Art"]),
//!     Profile::new("b", "male").with_interests(["Reading"]),
//! ];
//!
//! let scorer = CompatibilityScorer::new(WeightConfig::default()).unwrap();
//! let ranker = MatchRanker::new(scorer);
//! let matches = ranker.find_best_matches(&me, &population, 5, &SameGender);
//! assert_eq!(matches.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Weights   │────>│   Scorer    │────>│  Breakdown  │
//! │ (6 dims)    │     │ (a, b → s)  │     │ (explain)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐
//!                     │   Ranker    │<──── eligibility
//!                     │  (top-K)    │
//!                     └─────────────┘
//! ```

pub mod weights;
pub mod distance;
pub mod scorer;
pub mod rank;
pub mod explain;

// Re-export main types for convenience
pub use weights::{Dimension, WeightConfig, WeightError};
pub use distance::SleepMetric;
pub use scorer::{score, CompatibilityScorer, ScorerOptions};
pub use rank::{MatchRanker, ScoredCandidate};
pub use explain::{DimensionScore, MatchStats, ScoreBreakdown, ScoreTier};
