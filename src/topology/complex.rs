//! Filtered Complex Interface
//!
//! The renderer needs exactly two things from a topology engine:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  FilteredComplex Trait                    │
//! ├───────────────────────────────────────────────────────────┤
//! │  + filtration()  - (simplex, value) pairs, non-decreasing │
//! │  + dimension()   - Maximum simplex dimension present      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Ordering is a contract owed by the implementor; consumers rely on it
//! but do not check it.

use super::FilteredSimplex;
use crate::error::Result;

/// Lazy, finite sequence of filtered simplices
pub type Filtration<'a> = Box<dyn Iterator<Item = FilteredSimplex> + 'a>;

/// A simplicial complex with a filtration
pub trait FilteredComplex {
    /// Simplices in non-decreasing filtration order
    fn filtration(&self) -> Result<Filtration<'_>>;

    /// Maximum dimension of any simplex in the complex
    fn dimension(&self) -> usize;
}
