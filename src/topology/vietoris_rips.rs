//! Vietoris-Rips Complex Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! The filtration value of a simplex is the length of its longest edge,
//! so every simplex appears exactly when its last edge does.
//!
//! Simplices are enumerated as cliques of the ε-neighborhood graph,
//! growing each clique only with higher-indexed common neighbors so that
//! every simplex is visited once.

use ndarray::Array2;

use super::SimplexTree;
use crate::error::{RenderError, Result};
use crate::geometry::PointCloud;

/// Vietoris-Rips complex builder
pub struct RipsComplex {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Longest edge admitted in the complex
    max_edge_length: f64,
}

impl RipsComplex {
    /// Create from point cloud (computes distance matrix)
    pub fn from_points(points: &PointCloud, max_edge_length: f64) -> Result<Self> {
        let distances = Self::compute_distance_matrix(points.as_array());
        Self::from_distance_matrix(distances, max_edge_length)
    }

    /// Create from a precomputed symmetric distance matrix
    pub fn from_distance_matrix(distances: Array2<f64>, max_edge_length: f64) -> Result<Self> {
        if distances.nrows() != distances.ncols() {
            return Err(RenderError::InvalidConfig(format!(
                "distance matrix must be square, got {}x{}",
                distances.nrows(),
                distances.ncols()
            )));
        }
        if max_edge_length.is_nan() || max_edge_length < 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "max edge length must be non-negative, got {max_edge_length}"
            )));
        }

        Ok(Self {
            distances,
            max_edge_length,
        })
    }

    /// Compute Euclidean distance matrix
    fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let dim = points.ncols();

        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                let dist = dist_sq.sqrt();
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    /// Neighbors of each vertex with a higher index, within the edge threshold
    fn upper_neighbors(&self) -> Vec<Vec<usize>> {
        let n = self.n_points();
        (0..n)
            .map(|i| {
                (i + 1..n)
                    .filter(|&j| self.distances[[i, j]] <= self.max_edge_length)
                    .collect()
            })
            .collect()
    }

    /// All edges within the threshold as (i, j, length), i < j
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        self.upper_neighbors()
            .iter()
            .enumerate()
            .flat_map(|(i, nbrs)| nbrs.iter().map(move |&j| (i, j)))
            .map(|(i, j)| (i, j, self.distances[[i, j]]))
            .collect()
    }

    /// Build the filtered complex up to simplices of `max_dimension`
    pub fn create_simplex_tree(&self, max_dimension: usize) -> Result<SimplexTree> {
        let neighbors = self.upper_neighbors();
        let mut tree = SimplexTree::new();

        for v in 0..self.n_points() {
            tree.insert_without_faces(&[v], 0.0)?;
        }

        if max_dimension == 0 {
            return Ok(tree);
        }

        // A clique never outgrows the vertex set, whatever the cap
        let mut clique = Vec::with_capacity(max_dimension.min(self.n_points()).saturating_add(1));
        for v in 0..self.n_points() {
            clique.push(v);
            self.expand(&neighbors, &mut clique, &neighbors[v], 0.0, max_dimension, &mut tree)?;
            clique.pop();
        }

        log::debug!(
            "rips complex: {} points, {} simplices, dimension {}",
            self.n_points(),
            tree.num_simplices(),
            max_dimension
        );

        Ok(tree)
    }

    /// Grow `clique` by each candidate adjacent to all of its members
    fn expand(
        &self,
        neighbors: &[Vec<usize>],
        clique: &mut Vec<usize>,
        candidates: &[usize],
        filtration: f64,
        max_dimension: usize,
        tree: &mut SimplexTree,
    ) -> Result<()> {
        if clique.len() > max_dimension {
            return Ok(());
        }

        for (idx, &u) in candidates.iter().enumerate() {
            let value = clique
                .iter()
                .map(|&w| self.distances[[w, u]])
                .fold(filtration, f64::max);

            clique.push(u);
            // Every sub-clique is visited on its own, with its own value
            tree.insert_without_faces(clique.as_slice(), value)?;

            // Common neighbors of the grown clique, all above u
            let next: Vec<usize> = candidates[idx + 1..]
                .iter()
                .copied()
                .filter(|c| neighbors[u].binary_search(c).is_ok())
                .collect();
            self.expand(neighbors, clique, &next, value, max_dimension, tree)?;

            clique.pop();
        }

        Ok(())
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    pub fn max_edge_length(&self) -> f64 {
        self.max_edge_length
    }
}
