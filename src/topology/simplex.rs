//! Simplices and their filtration values

use itertools::Itertools;

/// A simplex represented by its (sorted, distinct) vertex indices
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Simplex {
    vertices: Vec<usize>,
}

impl Simplex {
    /// Create a simplex; vertex order and duplicates are normalized away
    pub fn new(vertices: impl IntoIterator<Item = usize>) -> Self {
        let mut vertices: Vec<usize> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dimension k of a k-simplex (vertex count minus one), `None` if empty
    pub fn dimension(&self) -> Option<usize> {
        self.vertices.len().checked_sub(1)
    }

    /// All 3-vertex sub-combinations (triangular faces), in lexicographic order
    ///
    /// C(k+1, 3) triangles for a k-simplex; none for points and edges.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.vertices
            .iter()
            .copied()
            .tuple_combinations()
            .map(|(a, b, c)| [a, b, c])
    }

    /// Every non-empty face, the simplex itself included
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        self.vertices
            .iter()
            .copied()
            .powerset()
            .filter(|face| !face.is_empty())
            .map(|vertices| Simplex { vertices })
    }
}

impl From<&[usize]> for Simplex {
    fn from(vertices: &[usize]) -> Self {
        Self::new(vertices.iter().copied())
    }
}

/// A simplex paired with the filtration value at which it appears
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSimplex {
    pub simplex: Simplex,
    pub filtration: f64,
}

impl FilteredSimplex {
    pub fn new(simplex: Simplex, filtration: f64) -> Self {
        Self { simplex, filtration }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dimension() {
        assert_eq!(Simplex::new([4]).dimension(), Some(0));
        assert_eq!(Simplex::new([1, 0]).dimension(), Some(1));
        assert_eq!(Simplex::new([2, 0, 1, 2]).dimension(), Some(2));
        assert_eq!(Simplex::new(Vec::new()).dimension(), None);
    }

    #[test]
    fn test_triangle_decomposes_into_itself() {
        let triangle = Simplex::new([0, 1, 2]);
        let faces: Vec<_> = triangle.triangles().collect();
        assert_eq!(faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_tetrahedron_has_four_faces() {
        let tetra = Simplex::new([3, 5, 7, 9]);
        let faces: HashSet<_> = tetra.triangles().collect();

        assert_eq!(faces.len(), 4);
        assert!(faces.contains(&[3, 5, 7]));
        assert!(faces.contains(&[3, 5, 9]));
        assert!(faces.contains(&[3, 7, 9]));
        assert!(faces.contains(&[5, 7, 9]));
    }

    #[test]
    fn test_points_and_edges_have_no_triangles() {
        assert_eq!(Simplex::new([0]).triangles().count(), 0);
        assert_eq!(Simplex::new([0, 1]).triangles().count(), 0);
    }

    #[test]
    fn test_all_faces() {
        // 2^3 - 1 non-empty subsets
        let faces: Vec<_> = Simplex::new([0, 1, 2]).faces().collect();
        assert_eq!(faces.len(), 7);
        assert!(faces.contains(&Simplex::new([1, 2])));
        assert!(faces.contains(&Simplex::new([0, 1, 2])));
    }
}
