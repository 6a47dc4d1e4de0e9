//! Render Module: Drawing Filtered Complexes in 3D
//!
//! A render call walks the filtration of a complex and draws every simplex
//! born at or below the cutoff on its own `Canvas3D`:
//!
//! - **Points**: red scatter markers
//! - **Edges**: thin dashed segments
//! - **Faces**: each 3-vertex face as a translucent surface, colored and
//!   faded by dimension
//!
//! The canvas is rasterized with an orthographic camera and saved to an
//! image file, or shown in a window when built with the `viewer` feature.

mod camera;
mod canvas;
mod output;
mod primitive;
mod raster;
mod renderer;
mod style;
#[cfg(feature = "viewer")]
mod viewer;

pub use camera::{Projection, ScreenPoint, View};
pub use canvas::{Artist, Canvas3D, CanvasConfig};
pub use output::{ensure_presentable, present};
pub use primitive::Primitive;
pub use renderer::{RenderConfig, RenderSummary, Renderer};
pub use style::{
    Color, EDGE_LINE_WIDTH, FACE_EDGE_WIDTH, LineStyle, MARKER_SIZE, PALETTE, color_by_dimension,
    face_alpha, hsv_colormap,
};
