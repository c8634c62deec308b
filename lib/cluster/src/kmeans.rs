//! Deterministic centroid clustering
//!
//! Seeds `k` centroids from the first `k` vectors, then alternates
//! nearest-centroid assignment with centroid recomputation until no label
//! changes or the iteration cap is reached.

use rayon::prelude::*;
use roomatch_core::{vectorize_all, Error, Profile, Result, Vector};
use serde::Serialize;
use tracing::{debug, trace};

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Groups profiles into behavioral clusters
#[derive(Debug, Clone, Copy)]
pub struct PopulationClusterer {
    max_iterations: usize,
}

impl Default for PopulationClusterer {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PopulationClusterer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the iteration cap (at least one iteration always runs)
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Cluster a population into `k` groups.
    ///
    /// Fails with [`Error::InvalidClusterCount`] when `k` is zero or larger
    /// than the population.
    pub fn cluster(&self, profiles: &[Profile], k: usize) -> Result<ClusterAssignment> {
        self.cluster_vectors(vectorize_all(profiles), k)
    }

    /// Cluster pre-computed feature vectors
    pub fn cluster_vectors(&self, vectors: Vec<Vector>, k: usize) -> Result<ClusterAssignment> {
        if k == 0 || k > vectors.len() {
            return Err(Error::InvalidClusterCount {
                k,
                population: vectors.len(),
            });
        }

        let mut centroids: Vec<Vector> = vectors[..k].to_vec();
        let mut labels = vec![0usize; vectors.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let next: Vec<usize> = vectors
                .par_iter()
                .map(|v| nearest_centroid(v, &centroids))
                .collect();

            let changed = next.iter().zip(labels.iter()).filter(|(a, b)| a != b).count();
            labels = next;

            // Empty clusters keep their previous centroid
            for (j, centroid) in centroids.iter_mut().enumerate() {
                let members = vectors
                    .iter()
                    .zip(labels.iter())
                    .filter(|(_, label)| **label == j)
                    .map(|(v, _)| v);
                if let Some(mean) = Vector::mean(members) {
                    *centroid = mean;
                }
            }

            trace!(iteration = iterations, changed, "clustering pass");

            if changed == 0 {
                converged = true;
                break;
            }
        }

        debug!(
            population = vectors.len(),
            k,
            iterations,
            converged,
            "clustering finished"
        );

        Ok(ClusterAssignment {
            k,
            labels,
            centroids,
            vectors,
            iterations,
            converged,
        })
    }
}

/// Index of the closest centroid; the lowest index wins ties
fn nearest_centroid(v: &Vector, centroids: &[Vector]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let dist = v.l2_distance(c);
        if dist < best_dist {
            best_dist = dist;
            best = j;
        }
    }
    best
}

/// Result of one clustering run
#[derive(Debug, Clone, Serialize)]
pub struct ClusterAssignment {
    k: usize,
    labels: Vec<usize>,
    centroids: Vec<Vector>,
    #[serde(skip)]
    vectors: Vec<Vector>,
    iterations: usize,
    converged: bool,
}

/// Per-cluster overview
#[derive(Debug, Clone, Serialize)]
pub struct ClusterSummary {
    pub cluster: usize,
    pub size: usize,
    /// Population indices of the members
    pub members: Vec<usize>,
    pub centroid: Vector,
}

impl ClusterAssignment {
    pub fn k(&self) -> usize {
        self.k
    }

    /// Cluster label of each profile, in population order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn centroids(&self) -> &[Vector] {
        &self.centroids
    }

    /// Passes run, including the one that confirmed the fixed point
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// True if the run stopped because no label changed
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn cluster_of(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied()
    }

    /// Population indices assigned to `cluster`
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == cluster)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for label in &self.labels {
            sizes[*label] += 1;
        }
        sizes
    }

    /// Within-cluster sum of squared distances to the centroids
    pub fn inertia(&self) -> f64 {
        self.vectors
            .iter()
            .zip(self.labels.iter())
            .map(|(v, label)| v.squared_distance(&self.centroids[*label]))
            .sum()
    }

    pub fn summaries(&self) -> Vec<ClusterSummary> {
        (0..self.k)
            .map(|cluster| {
                let members = self.members(cluster);
                ClusterSummary {
                    cluster,
                    size: members.len(),
                    members,
                    centroid: self.centroids[cluster].clone(),
                }
            })
            .collect()
    }
}
