//! Profile feature vectors
//!
//! Maps a profile onto five roughly unit-scaled coordinates used by the
//! distance-based population operations (clustering, cohort analytics).
//!
//! | # | Feature | Encoding |
//! |---|---------|----------|
//! | 0 | sleep | `sleep_hour / 24` |
//! | 1 | study | quiet 0.0, music 0.5, group 1.0 |
//! | 2 | cleanliness | `cleanliness / 10` |
//! | 3 | social | introvert 0.0, extrovert 1.0 |
//! | 4 | interests | `interest count / 10`, not clamped |

use crate::profile::{Profile, SocialType};
use crate::vector::Vector;

/// Number of coordinates produced by [`vectorize`]
pub const FEATURE_DIM: usize = 5;

/// Vectorize a profile. Total and side-effect free.
pub fn vectorize(profile: &Profile) -> Vector {
    Vector::new(vec![
        profile.sleep_hour / 24.0,
        profile.study_habit.ordinal() as f64 / 2.0,
        f64::from(profile.cleanliness) / 10.0,
        match profile.social_type {
            SocialType::Introvert => 0.0,
            SocialType::Extrovert => 1.0,
        },
        profile.interests.len() as f64 / 10.0,
    ])
}

/// Vectorize a whole population, preserving order
pub fn vectorize_all(profiles: &[Profile]) -> Vec<Vector> {
    profiles.iter().map(vectorize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StudyHabit;

    #[test]
    fn test_vectorize_encoding() {
        let p = Profile::new("p1", "female")
            .with_sleep_hour(24.0)
            .with_study_habit(StudyHabit::Music)
            .with_cleanliness(8)
            .with_social_type(SocialType::Extrovert)
            .with_interests(["Art", "Music"]);

        let v = vectorize(&p);
        assert_eq!(v.dim(), FEATURE_DIM);
        assert_eq!(v.as_slice(), &[1.0, 0.5, 0.8, 1.0, 0.2]);
    }

    #[test]
    fn test_interest_feature_not_clamped() {
        let interests: Vec<String> = (0..12).map(|i| format!("i{}", i)).collect();
        let p = Profile::new("p1", "male").with_interests(interests);
        assert!((vectorize(&p).as_slice()[4] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_study_habit_ordering() {
        let values: Vec<f64> = StudyHabit::ALL
            .iter()
            .map(|h| vectorize(&Profile::new("x", "y").with_study_habit(*h)).as_slice()[1])
            .collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0]);
    }
}
