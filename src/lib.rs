//! # roomatch
//!
//! A roommate compatibility engine: weighted lifestyle scoring, top-K
//! matching and population clustering over an in-memory snapshot.
//!
//! All engine operations are pure and synchronous. They read profiles,
//! never mutate them, and keep no state between calls.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! roomatch --sample 50 --seed 42 match --target STU001 --top 8
//! roomatch --population students.json cluster -k 3
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use roomatch::prelude::*;
//!
//! let population = generate_population(&SampleConfig::new(50, 42));
//! let target = &population[0];
//!
//! let scorer = CompatibilityScorer::new(WeightConfig::default()).unwrap();
//! let matches = MatchRanker::new(scorer).find_best_matches(target, &population, 8, &SameGender);
//! assert_eq!(matches.len(), 8);
//!
//! let clusters = PopulationClusterer::new().cluster(&population, 3).unwrap();
//! assert_eq!(clusters.labels().len(), 50);
//! ```
//!
//! ## Crate Structure
//!
//! - `roomatch-core` - Profiles, feature vectors, eligibility predicates, errors
//! - `roomatch-similarity` - Weights, compatibility scoring, ranking, explanations
//! - `roomatch-cluster` - Deterministic centroid clustering

pub mod population;
pub mod sample;

// Re-export core types
pub use roomatch_core::{
    vectorize, Eligibility, EligibilityCondition, Error, Profile, ProfileId, Result,
    SameGender, SocialType, StudyHabit, Vector, FEATURE_DIM,
};

// Re-export scoring and ranking
pub use roomatch_similarity::{
    score, CompatibilityScorer, Dimension, MatchRanker, MatchStats, ScoreBreakdown, ScoreTier,
    ScoredCandidate, ScorerOptions, SleepMetric, WeightConfig,
};

// Re-export clustering
pub use roomatch_cluster::{ClusterAssignment, ClusterSummary, PopulationClusterer};

pub use population::{find_profile, load_population, save_population};
pub use sample::{generate_population, SampleConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generate_population, load_population, score, vectorize, ClusterAssignment,
        CompatibilityScorer, Dimension, Eligibility, EligibilityCondition, Error, MatchRanker,
        PopulationClusterer, Profile, ProfileId, Result, SameGender, SampleConfig,
        ScoredCandidate, SocialType, StudyHabit, WeightConfig,
    };
}
