//! # TDA Draw Complex
//!
//! 3D drawings of filtered simplicial complexes built over point clouds
//!
//! ## Overview
//!
//! A filtration assigns each simplex the scale ε at which it is born. This
//! crate walks that filtration in order and draws every simplex born at or
//! below a chosen ε, giving a picture of the complex at that scale:
//!
//!   points (red markers) → edges (dashed) → faces (translucent surfaces)
//!
//! Higher-dimensional simplices are drawn through their triangular faces,
//! colored by dimension and increasingly transparent.
//!
//! ### Components
//!
//! 1. **Geometry**: point clouds and seeded sphere samplers
//!
//! 2. **Topology**: the `FilteredComplex` abstraction, a simplex tree, and
//!    Vietoris-Rips construction
//!
//! 3. **Render**: primitives, styling, a software-rasterized 3D canvas, and
//!    file or window output
//!
//! ## Example
//!
//! ```no_run
//! use tda_draw_complex::{pipeline, sample_dataset, PipelineConfig, DEFAULT_SEED};
//!
//! let points = sample_dataset(DEFAULT_SEED)?;
//! let mut config = PipelineConfig::default();
//! config.render.output = Some("complex.png".into());
//! let summary = pipeline::run(&points, &config)?;
//! println!("{} simplices drawn", summary.simplices());
//! # Ok::<(), tda_draw_complex::RenderError>(())
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian, "Fast construction of the Vietoris-Rips complex" (2010)

pub mod error;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod topology;

pub use error::{RenderError, Result};
pub use logging::{LoggingConfig, init_logging};
pub use pipeline::PipelineConfig;

// Re-exports from geometry
pub use geometry::{
    DEFAULT_SEED,
    Point3,
    PointCloud,
    intersected_spheres,
    random_sphere,
    sample_dataset,
};

// Re-exports from topology
pub use topology::{
    FilteredComplex,
    FilteredSimplex,
    Filtration,
    RipsComplex,
    Simplex,
    SimplexTree,
};

// Re-exports from render
pub use render::{
    Canvas3D,
    CanvasConfig,
    Color,
    Primitive,
    RenderConfig,
    RenderSummary,
    Renderer,
    View,
};
