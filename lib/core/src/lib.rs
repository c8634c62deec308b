//! # roomatch Core
//!
//! Core types for the roomatch compatibility engine.
//!
//! - [`Profile`] - One person's matching-relevant lifestyle attributes
//! - [`Vector`] - Dense feature vector with distance helpers
//! - [`vectorize`] - Profile to 5-dimensional feature vector
//! - [`Eligibility`] - Predicates deciding who may be matched with whom
//!
//! ## Example
//!
//! ```rust
//! use roomatch_core::{vectorize, Profile, SocialType, StudyHabit};
//!
//! let profile = Profile::new("STU001", "female")
//!     .with_sleep_hour(24.0)
//!     .with_study_habit(StudyHabit::Music)
//!     .with_cleanliness(8)
//!     .with_social_type(SocialType::Extrovert)
//!     .with_interests(["Reading", "Art"]);
//!
//! let v = vectorize(&profile);
//! assert_eq!(v.dim(), 5);
//! ```

pub mod error;
pub mod filter;
pub mod profile;
pub mod vector;
pub mod vectorize;

pub use error::{Error, Result};
pub use filter::{Eligibility, EligibilityCondition, SameGender};
pub use profile::{Profile, ProfileId, SocialType, StudyHabit};
pub use vector::Vector;
pub use vectorize::{vectorize, vectorize_all, FEATURE_DIM};
