//! Per-dimension similarity functions
//!
//! Each function compares one attribute of two profiles and returns a
//! sub-score, 1.0 meaning identical. All of them are symmetric in their
//! arguments. Only the sleep term may leave [0.0, 1.0]: it goes negative
//! once two bedtimes are more than twelve hours apart.

use roomatch_core::{SocialType, StudyHabit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hours of bedtime difference at which the sleep sub-score reaches 0
pub const SLEEP_SPAN_HOURS: f64 = 12.0;

/// Cleanliness difference at which the cleanliness sub-score reaches 0
pub const CLEANLINESS_SPAN: f64 = 10.0;

/// Partial credit for a quiet/music study pairing
pub const QUIET_MUSIC_CREDIT: f64 = 0.3;

/// Partial credit for mismatched social types
pub const SOCIAL_MISMATCH_CREDIT: f64 = 0.5;

/// Floor credit when two profiles share no language
pub const NO_SHARED_LANGUAGE_CREDIT: f64 = 0.3;

/// How bedtime differences are measured
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SleepMetric {
    /// Plain difference on the extended evening scale (24..=27 = after midnight)
    #[default]
    Linear,
    /// Shortest distance around a 24-hour clock
    Circular,
}

/// Sleep schedule sub-score: `1 - diff / 12`, not clamped below zero
pub fn sleep_similarity(a: f64, b: f64, metric: SleepMetric) -> f64 {
    let diff = match metric {
        SleepMetric::Linear => (a - b).abs(),
        SleepMetric::Circular => {
            let d = (a - b).abs().rem_euclid(24.0);
            d.min(24.0 - d)
        }
    };
    1.0 - diff / SLEEP_SPAN_HOURS
}

/// Study habit sub-score
///
/// # Returns
/// 1.0 for equal habits, partial credit for the quiet/music pair, else 0.0
pub fn study_similarity(a: StudyHabit, b: StudyHabit) -> f64 {
    match (a, b) {
        _ if a == b => 1.0,
        (StudyHabit::Quiet, StudyHabit::Music) | (StudyHabit::Music, StudyHabit::Quiet) => {
            QUIET_MUSIC_CREDIT
        }
        _ => 0.0,
    }
}

/// Cleanliness sub-score: `1 - |a - b| / 10`
pub fn cleanliness_similarity(a: u8, b: u8) -> f64 {
    1.0 - f64::from(a.abs_diff(b)) / CLEANLINESS_SPAN
}

pub fn social_similarity(a: SocialType, b: SocialType) -> f64 {
    if a == b {
        1.0
    } else {
        SOCIAL_MISMATCH_CREDIT
    }
}

/// Interest overlap: shared count divided by the larger set size.
///
/// This is not Jaccard (which divides by the union); a small set fully
/// contained in a large one scores `small / large`. Two empty sets score 0.
pub fn interest_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / larger as f64
}

/// Language sub-score: full credit for any shared language
pub fn language_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_disjoint(b) {
        NO_SHARED_LANGUAGE_CREDIT
    } else {
        1.0
    }
}
