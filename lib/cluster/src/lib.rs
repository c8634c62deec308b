//! # roomatch Cluster
//!
//! Population segmentation for cohort analytics. Profiles are vectorized
//! and grouped by iterative centroid refinement; the result is fully
//! determined by the input order.
//!
//! ```rust
//! use roomatch_cluster::PopulationClusterer;
//! use roomatch_core::Profile;
//!
//! let profiles = vec![
//!     Profile::new("a", "female").with_sleep_hour(21.0),
//!     Profile::new("b", "female").with_sleep_hour(27.0),
//!     Profile::new("c", "male").with_sleep_hour(21.5),
//! ];
//! let assignment = PopulationClusterer::new().cluster(&profiles, 2).unwrap();
//! assert_eq!(assignment.labels(), &[0, 1, 0]);
//! ```

pub mod kmeans;

pub use kmeans::{ClusterAssignment, ClusterSummary, PopulationClusterer, DEFAULT_MAX_ITERATIONS};
