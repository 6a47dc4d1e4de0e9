//! Topology Module: Filtered Simplicial Complexes
//!
//! The renderer consumes complexes through the two-operation
//! `FilteredComplex` trait (ordered filtration, maximum dimension). This
//! module also provides a concrete engine to feed it:
//!
//! - `SimplexTree`: in-memory filtered complex, faces inserted with cofaces
//! - `RipsComplex`: Vietoris-Rips construction from a point cloud
//!
//! ## Mathematical Background
//!
//! For a point cloud X we build the flag complex VR_ε(X) of the
//! ε-neighborhood graph. Each simplex is born at the length of its longest
//! edge, which yields a filtration: every face is born no later than the
//! simplices that contain it.

mod complex;
mod simplex;
mod simplex_tree;
mod vietoris_rips;

pub use complex::{FilteredComplex, Filtration};
pub use simplex::{FilteredSimplex, Simplex};
pub use simplex_tree::SimplexTree;
pub use vietoris_rips::RipsComplex;
