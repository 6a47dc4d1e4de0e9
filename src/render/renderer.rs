//! Renderer: Filtration-Driven Drawing of a Simplicial Complex
//!
//! ## Protocol
//!
//! 1. Create a fresh canvas owned by this call
//! 2. Walk the filtration in order; stop at the first value above the
//!    cutoff (the order makes every later value at least as large)
//! 3. Resolve each simplex to a primitive and draw it
//! 4. Save the canvas to the output path, or show it in a window
//!
//! Any error aborts the walk before anything is written.

use std::path::PathBuf;

use super::canvas::{Canvas3D, CanvasConfig};
use super::output;
use super::primitive::Primitive;
use crate::error::{RenderError, Result};
use crate::geometry::PointCloud;
use crate::topology::FilteredComplex;

/// Configuration of one render call
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stop drawing at the first simplex whose filtration value exceeds this
    pub max_epsilon: Option<f64>,
    /// Output image; `None` presents the plot in a window
    pub output: Option<PathBuf>,
    /// Image size, resolution and viewpoint
    pub canvas: CanvasConfig,
    /// Window title when presenting interactively
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_epsilon: None,
            output: None,
            canvas: CanvasConfig::default(),
            title: "simplicial complex".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(eps) = self.max_epsilon {
            if eps.is_nan() {
                return Err(RenderError::InvalidConfig("max_epsilon is NaN".to_string()));
            }
        }
        self.canvas.validate()
    }
}

/// What a render call drew
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    /// 0-simplices drawn
    pub points: usize,
    /// 1-simplices drawn
    pub edges: usize,
    /// Simplices of dimension ≥ 2 drawn
    pub faces: usize,
    /// Triangles emitted for those faces
    pub triangles: usize,
    /// Filtration value that stopped the walk, if the cutoff was reached
    pub stopped_at: Option<f64>,
}

impl RenderSummary {
    /// Total number of simplices drawn
    pub fn simplices(&self) -> usize {
        self.points + self.edges + self.faces
    }

    fn record(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Point(_) => self.points += 1,
            Primitive::Edge(_) => self.edges += 1,
            Primitive::Face { triangles, .. } => {
                self.faces += 1;
                self.triangles += triangles.len();
            }
        }
    }
}

/// Draws a filtered complex over the point cloud it indexes into
pub struct Renderer<'a, C: FilteredComplex + ?Sized> {
    complex: &'a C,
    points: &'a PointCloud,
    config: RenderConfig,
}

impl<'a, C: FilteredComplex + ?Sized> Renderer<'a, C> {
    /// # Arguments
    /// * `complex` - Filtered complex to draw
    /// * `points` - Coordinates its simplices index into
    /// * `config` - Cutoff, output and canvas settings
    pub fn new(complex: &'a C, points: &'a PointCloud, config: RenderConfig) -> Self {
        Self {
            complex,
            points,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Walk the filtration onto a new canvas and return it
    pub fn draw(&self) -> Result<(Canvas3D, RenderSummary)> {
        self.config.validate()?;

        let mut canvas = Canvas3D::new(self.config.canvas.clone())?;
        let mut summary = RenderSummary::default();

        let max_dim = self.complex.dimension();
        let filtration = self.complex.filtration()?;

        log::debug!(
            "drawing complex of dimension {} over {} points (cutoff {:?})",
            max_dim,
            self.points.len(),
            self.config.max_epsilon
        );

        for entry in filtration {
            if let Some(eps) = self.config.max_epsilon {
                if entry.filtration > eps {
                    summary.stopped_at = Some(entry.filtration);
                    break;
                }
            }

            let primitive = Primitive::from_simplex(&entry.simplex, self.points)?;
            if primitive.dimension() > max_dim {
                log::warn!(
                    "simplex {:?} exceeds reported complex dimension {}",
                    entry.simplex.vertices(),
                    max_dim
                );
            }

            summary.record(&primitive);
            primitive.draw(&mut canvas, max_dim);
        }

        log::debug!(
            "drew {} points, {} edges, {} faces ({} triangles)",
            summary.points,
            summary.edges,
            summary.faces,
            summary.triangles
        );

        Ok((canvas, summary))
    }

    /// Draw, then save to the output path or present interactively
    pub fn render(&self) -> Result<RenderSummary> {
        output::ensure_presentable(self.config.output.as_deref())?;
        let (canvas, summary) = self.draw()?;
        output::present(&canvas, self.config.output.as_deref(), &self.config.title)?;
        Ok(summary)
    }
}
