//! Simplex Tree: In-Memory Filtered Complex
//!
//! Stores every simplex together with its filtration value. Inserting a
//! simplex also inserts all of its faces; a simplex that is already present
//! keeps the smaller of its old and new values, so a face never appears
//! after one of its cofaces.
//!
//! The filtration is emitted sorted by (value, dimension, vertices), which
//! puts faces before cofaces when values tie.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{FilteredComplex, FilteredSimplex, Filtration, Simplex};
use crate::error::{RenderError, Result};

/// Filtered simplicial complex keyed by simplex
#[derive(Debug, Clone, Default)]
pub struct SimplexTree {
    /// Simplex -> filtration value
    simplices: BTreeMap<Simplex, f64>,
    /// Highest dimension inserted so far
    max_dimension: usize,
}

impl SimplexTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a simplex and all of its faces at `filtration`
    ///
    /// Returns `true` if the simplex itself was not present before.
    pub fn insert(&mut self, vertices: &[usize], filtration: f64) -> Result<bool> {
        let (simplex, dim) = Self::checked(vertices, filtration)?;
        let is_new = !self.simplices.contains_key(&simplex);

        for face in simplex.faces() {
            self.store(face, filtration);
        }

        self.max_dimension = self.max_dimension.max(dim);
        Ok(is_new)
    }

    /// Insert a single simplex, leaving its faces untouched
    ///
    /// For builders that emit every face on their own (each clique of a
    /// Rips expansion is visited once). The complex is only closed under
    /// faces once the builder is done.
    pub(crate) fn insert_without_faces(&mut self, vertices: &[usize], filtration: f64) -> Result<bool> {
        let (simplex, dim) = Self::checked(vertices, filtration)?;
        let is_new = self.store(simplex, filtration);
        self.max_dimension = self.max_dimension.max(dim);
        Ok(is_new)
    }

    fn checked(vertices: &[usize], filtration: f64) -> Result<(Simplex, usize)> {
        if !filtration.is_finite() || filtration < 0.0 {
            return Err(RenderError::Filtration(format!(
                "filtration value {filtration} for {vertices:?} is not a finite non-negative number"
            )));
        }

        let simplex = Simplex::from(vertices);
        let dim = simplex.dimension().ok_or(RenderError::EmptySimplex)?;
        Ok((simplex, dim))
    }

    /// Store at the lower of the existing and new value; `true` if new
    fn store(&mut self, simplex: Simplex, filtration: f64) -> bool {
        match self.simplices.entry(simplex) {
            Entry::Occupied(mut entry) => {
                let value = entry.get_mut();
                *value = value.min(filtration);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(filtration);
                true
            }
        }
    }

    /// Filtration value of a simplex, if present
    #[cfg(test)]
    pub fn filtration_of(&self, vertices: &[usize]) -> Option<f64> {
        self.simplices.get(&Simplex::from(vertices)).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, vertices: &[usize]) -> bool {
        self.simplices.contains_key(&Simplex::from(vertices))
    }

    /// Total number of simplices (all dimensions)
    pub fn num_simplices(&self) -> usize {
        self.simplices.len()
    }

    /// Number of 0-simplices
    pub fn num_vertices(&self) -> usize {
        self.simplices.keys().filter(|s| s.len() == 1).count()
    }

    /// Number of simplices of dimension `d`
    pub fn count(&self, d: usize) -> usize {
        self.simplices.keys().filter(|s| s.dimension() == Some(d)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Sorted copy of the filtration
    pub fn sorted(&self) -> Vec<FilteredSimplex> {
        let mut entries: Vec<FilteredSimplex> = self
            .simplices
            .iter()
            .map(|(simplex, &value)| FilteredSimplex::new(simplex.clone(), value))
            .collect();

        entries.sort_by(|a, b| {
            a.filtration
                .total_cmp(&b.filtration)
                .then(a.simplex.len().cmp(&b.simplex.len()))
                .then_with(|| a.simplex.cmp(&b.simplex))
        });

        entries
    }
}

impl FilteredComplex for SimplexTree {
    fn filtration(&self) -> Result<Filtration<'_>> {
        Ok(Box::new(self.sorted().into_iter()))
    }

    fn dimension(&self) -> usize {
        self.max_dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_adds_faces() {
        let mut st = SimplexTree::new();
        assert!(st.insert(&[0, 1, 2], 0.7).unwrap());

        assert_eq!(st.num_simplices(), 7);
        assert_eq!(st.num_vertices(), 3);
        assert_eq!(st.count(1), 3);
        assert_eq!(st.dimension(), 2);
        assert_eq!(st.filtration_of(&[2, 0]), Some(0.7));
    }

    #[test]
    fn test_faces_keep_lowest_value() {
        let mut st = SimplexTree::new();
        st.insert(&[0], 0.0).unwrap();
        st.insert(&[1], 0.0).unwrap();
        st.insert(&[0, 1], 0.5).unwrap();
        assert!(!st.insert(&[0, 1], 0.9).unwrap());

        assert_eq!(st.filtration_of(&[0]), Some(0.0));
        assert_eq!(st.filtration_of(&[0, 1]), Some(0.5));
    }

    #[test]
    fn test_filtration_order() {
        let mut st = SimplexTree::new();
        st.insert(&[0, 1, 2], 1.0).unwrap();
        st.insert(&[0, 1], 0.3).unwrap();
        st.insert(&[0], 0.0).unwrap();
        st.insert(&[1], 0.0).unwrap();

        let filtration: Vec<_> = st.filtration().unwrap().collect();
        assert_eq!(filtration.len(), 7);

        for pair in filtration.windows(2) {
            assert!(pair[0].filtration <= pair[1].filtration);
        }

        // Edge and triangle at 1.0: faces come first
        let last = filtration.last().unwrap();
        assert_eq!(last.simplex.vertices(), &[0, 1, 2]);
        assert_eq!(last.filtration, 1.0);
    }

    #[test]
    fn test_insert_without_faces() {
        let mut st = SimplexTree::new();
        assert!(st.insert_without_faces(&[0, 1, 2], 0.8).unwrap());

        assert_eq!(st.num_simplices(), 1);
        assert!(!st.contains(&[0, 1]));
        assert_eq!(st.dimension(), 2);

        // Lowered, never raised
        assert!(!st.insert_without_faces(&[2, 1, 0], 0.9).unwrap());
        assert_eq!(st.filtration_of(&[0, 1, 2]), Some(0.8));
        st.insert_without_faces(&[0, 1, 2], 0.4).unwrap();
        assert_eq!(st.filtration_of(&[0, 1, 2]), Some(0.4));

        assert!(matches!(
            st.insert_without_faces(&[0], f64::INFINITY),
            Err(RenderError::Filtration(_))
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut st = SimplexTree::new();
        assert!(matches!(st.insert(&[0], f64::NAN), Err(RenderError::Filtration(_))));
        assert!(matches!(st.insert(&[0], -1.0), Err(RenderError::Filtration(_))));
        assert!(matches!(st.insert(&[], 0.0), Err(RenderError::EmptySimplex)));
        assert!(st.is_empty());
    }
}
