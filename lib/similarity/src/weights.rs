//! Weight configuration
//!
//! Declares how much each compatibility dimension counts toward the final
//! score. Weights need not sum to 1.0; the scorer divides by their total.

use roomatch_core::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// The six scored compatibility dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sleep,
    Study,
    Cleanliness,
    Social,
    Interests,
    Languages,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Sleep,
        Dimension::Study,
        Dimension::Cleanliness,
        Dimension::Social,
        Dimension::Interests,
        Dimension::Languages,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Sleep => "sleep",
            Dimension::Study => "study",
            Dimension::Cleanliness => "cleanliness",
            Dimension::Social => "social",
            Dimension::Interests => "interests",
            Dimension::Languages => "languages",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-dimension weights.
///
/// Fields missing from a JSON document fall back to the default weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightConfig {
    pub sleep: f64,
    pub study: f64,
    pub cleanliness: f64,
    pub social: f64,
    pub interests: f64,
    pub languages: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            sleep: 0.25,
            study: 0.20,
            cleanliness: 0.20,
            social: 0.15,
            interests: 0.15,
            languages: 0.05,
        }
    }
}

impl WeightConfig {
    /// Same weight on every dimension
    pub fn uniform(weight: f64) -> Self {
        Self {
            sleep: weight,
            study: weight,
            cleanliness: weight,
            social: weight,
            interests: weight,
            languages: weight,
        }
    }

    /// Load a weight configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> roomatch_core::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let weights: WeightConfig = serde_json::from_str(&raw)?;
        Ok(weights)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Sleep => self.sleep,
            Dimension::Study => self.study,
            Dimension::Cleanliness => self.cleanliness,
            Dimension::Social => self.social,
            Dimension::Interests => self.interests,
            Dimension::Languages => self.languages,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Sleep => &mut self.sleep,
            Dimension::Study => &mut self.study,
            Dimension::Cleanliness => &mut self.cleanliness,
            Dimension::Social => &mut self.social,
            Dimension::Interests => &mut self.interests,
            Dimension::Languages => &mut self.languages,
        }
    }

    pub fn total(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }

    /// Validate the configuration
    /// - Every weight must be finite and non-negative
    /// - At least one weight must be positive
    /// - The total must stay finite
    ///
    /// Returns the total weight used as the scoring denominator.
    pub fn validate(&self) -> Result<f64, WeightError> {
        for dimension in Dimension::ALL {
            let weight = self.get(dimension);
            if !weight.is_finite() {
                return Err(WeightError::NonFiniteWeight(dimension));
            }
            if weight < 0.0 {
                return Err(WeightError::NegativeWeight(dimension));
            }
        }

        let total = self.total();
        if !total.is_finite() {
            return Err(WeightError::NonFiniteTotal);
        }
        if total <= 0.0 {
            return Err(WeightError::ZeroTotalWeight);
        }

        Ok(total)
    }

    /// Rescale weights to sum to 1.0. Scores are unchanged by this.
    pub fn normalized(&self) -> Result<Self, WeightError> {
        let total = self.validate()?;
        let mut out = *self;
        for dimension in Dimension::ALL {
            *out.get_mut(dimension) /= total;
        }
        Ok(out)
    }

    /// Replace weights for the given dimensions.
    /// Negative overrides are clamped to zero.
    pub fn with_overrides(&self, overrides: &HashMap<Dimension, f64>) -> Self {
        let mut out = *self;
        for (dimension, weight) in overrides {
            *out.get_mut(*dimension) = weight.max(0.0);
        }
        out
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("Dimension '{0}' has negative weight")]
    NegativeWeight(Dimension),

    #[error("Dimension '{0}' has a non-finite weight")]
    NonFiniteWeight(Dimension),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Total weight overflows")]
    NonFiniteTotal,
}

impl From<WeightError> for Error {
    fn from(err: WeightError) -> Self {
        Error::InvalidWeightConfig(err.to_string())
    }
}
