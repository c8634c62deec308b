use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier of a profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    String(String),
    Integer(u64),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::String(s) => write!(f, "{}", s),
            ProfileId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        ProfileId::String(s.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        ProfileId::String(s)
    }
}

impl From<u64> for ProfileId {
    fn from(i: u64) -> Self {
        ProfileId::Integer(i)
    }
}

/// How a person prefers to study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StudyHabit {
    #[default]
    Quiet,
    Music,
    Group,
}

impl StudyHabit {
    pub const ALL: [StudyHabit; 3] = [StudyHabit::Quiet, StudyHabit::Music, StudyHabit::Group];

    /// Position in the quiet < music < group ordering
    pub fn ordinal(self) -> usize {
        match self {
            StudyHabit::Quiet => 0,
            StudyHabit::Music => 1,
            StudyHabit::Group => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialType {
    #[default]
    Introvert,
    Extrovert,
}

/// Matching-relevant attributes of one person.
///
/// `sleep_hour` uses the extended evening scale: hours after midnight are
/// written as 24..=27 so that later bedtimes always compare larger.
/// Profiles are read-only inputs; nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    #[serde(alias = "gender")]
    pub gender_category: String,
    #[serde(alias = "sleepTime")]
    pub sleep_hour: f64,
    #[serde(alias = "wakeTime")]
    pub wake_hour: f64,
    #[serde(alias = "studyHabits")]
    pub study_habit: StudyHabit,
    pub cleanliness: u8,
    #[serde(alias = "social")]
    pub social_type: SocialType,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

impl Profile {
    /// Create a profile with neutral lifestyle defaults.
    /// Use the `with_*` methods to fill in the rest.
    pub fn new(id: impl Into<ProfileId>, gender_category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gender_category: gender_category.into(),
            sleep_hour: 23.0,
            wake_hour: 7.0,
            study_habit: StudyHabit::default(),
            cleanliness: 5,
            social_type: SocialType::default(),
            interests: BTreeSet::new(),
            languages: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_sleep_hour(mut self, hour: f64) -> Self {
        self.sleep_hour = hour;
        self
    }

    #[must_use]
    pub fn with_wake_hour(mut self, hour: f64) -> Self {
        self.wake_hour = hour;
        self
    }

    #[must_use]
    pub fn with_study_habit(mut self, habit: StudyHabit) -> Self {
        self.study_habit = habit;
        self
    }

    #[must_use]
    pub fn with_cleanliness(mut self, cleanliness: u8) -> Self {
        self.cleanliness = cleanliness;
        self
    }

    #[must_use]
    pub fn with_social_type(mut self, social: SocialType) -> Self {
        self.social_type = social;
        self
    }

    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Human-readable bedtime, e.g. `1:00 AM` for an encoded 25
    pub fn bedtime_label(&self) -> String {
        let hour = self.sleep_hour.floor() as i64;
        let suffix = if hour >= 24 || hour < 12 { "AM" } else { "PM" };
        let clock = match hour.rem_euclid(12) {
            0 => 12,
            h => h,
        };
        format!("{}:00 {}", clock, suffix)
    }
}
