//! Seeded synthetic populations for demos, tests and benchmarks.
//!
//! Lives outside the engine: the scorer, ranker and clusterer never touch
//! a random generator. The same `SampleConfig` always yields the same
//! population.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roomatch_core::{Profile, SocialType, StudyHabit};
use serde::{Deserialize, Serialize};

pub const INTEREST_LABELS: [&str; 10] = [
    "Reading",
    "Sports",
    "Music",
    "Gaming",
    "Cooking",
    "Art",
    "Hiking",
    "Photography",
    "Coding",
    "Dancing",
];

pub const LANGUAGE_LABELS: [&str; 7] = [
    "English",
    "Spanish",
    "Hindi",
    "Mandarin",
    "French",
    "Arabic",
    "Portuguese",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SampleConfig {
    pub size: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { size: 50, seed: 42 }
    }
}

impl SampleConfig {
    pub fn new(size: usize, seed: u64) -> Self {
        Self { size, seed }
    }
}

/// Generate a population of `config.size` profiles.
///
/// Ids run `STU001`, `STU002`, ...; gender alternates starting with
/// `male`. Bedtimes fall in 22..=27 on the extended scale.
pub fn generate_population(config: &SampleConfig) -> Vec<Profile> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.size)
        .map(|i| sample_profile(&mut rng, i))
        .collect()
}

fn sample_profile(rng: &mut StdRng, index: usize) -> Profile {
    let gender = if index % 2 == 0 { "male" } else { "female" };
    let study = StudyHabit::ALL[rng.random_range(0..StudyHabit::ALL.len())];
    let social = if rng.random_bool(0.5) {
        SocialType::Extrovert
    } else {
        SocialType::Introvert
    };

    let interest_draws = rng.random_range(2..=5);
    let interests: Vec<&str> = (0..interest_draws)
        .map(|_| pick(rng, &INTEREST_LABELS))
        .collect();
    let language_draws = rng.random_range(1..=2);
    let languages: Vec<&str> = (0..language_draws)
        .map(|_| pick(rng, &LANGUAGE_LABELS))
        .collect();

    Profile::new(format!("STU{:03}", index + 1), gender)
        .with_sleep_hour(f64::from(rng.random_range(22u8..=27)))
        .with_wake_hour(f64::from(rng.random_range(6u8..=10)))
        .with_study_habit(study)
        .with_cleanliness(rng.random_range(6..=10))
        .with_social_type(social)
        .with_interests(interests)
        .with_languages(languages)
}

fn pick<'a>(rng: &mut StdRng, labels: &[&'a str]) -> &'a str {
    labels[rng.random_range(0..labels.len())]
}
