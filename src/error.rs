//! Error type shared by the whole crate.
//!
//! Rendering is one-shot: any error aborts the traversal and nothing is
//! persisted. There is no retry classification.

use thiserror::Error;

/// Errors raised while building, drawing or presenting a complex.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The point cloud has no points; rejected before a complex is built.
    #[error("point cloud is empty")]
    EmptyPointCloud,

    /// Point rows must be (x, y, z).
    #[error("point cloud rows must have 3 coordinates, found {found}")]
    InvalidPointDimension { found: usize },

    /// A simplex references a point the cloud does not contain.
    #[error("simplex references point {index} but the cloud has {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },

    /// A simplex without vertices has no dimension.
    #[error("filtration yielded an empty simplex")]
    EmptySimplex,

    /// The complex could not produce its filtration.
    #[error("filtration unavailable: {0}")]
    Filtration(String),

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encoding the image failed (including unsupported extensions).
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// No output path was configured and the crate was built without the
    /// `viewer` feature.
    #[error("no output path configured and interactive viewer is not available (enable the `viewer` feature)")]
    ViewerUnavailable,

    /// The interactive viewer failed to start or present.
    #[error("viewer error: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
