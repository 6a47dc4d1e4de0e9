//! End-to-end pipeline: point cloud → Rips complex → rendered plot

use crate::error::{RenderError, Result};
use crate::geometry::PointCloud;
use crate::render::{RenderConfig, RenderSummary, Renderer, ensure_presentable};
use crate::topology::{FilteredComplex, RipsComplex};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Highest simplex dimension built by the Rips expansion
    pub complex_dimension: usize,
    /// Longest edge admitted in the Rips complex
    pub max_edge_length: f64,
    /// Cutoff, output and canvas settings
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            complex_dimension: 4,
            max_edge_length: 0.5,
            render: RenderConfig {
                max_epsilon: Some(0.5),
                ..RenderConfig::default()
            },
        }
    }
}

/// Build the Rips complex of `points` and render it
///
/// An empty cloud, or a missing output path in a build without a viewer,
/// is rejected before anything is built or written.
pub fn run(points: &PointCloud, config: &PipelineConfig) -> Result<RenderSummary> {
    let Some((min, max)) = points.bounds() else {
        return Err(RenderError::EmptyPointCloud);
    };
    ensure_presentable(config.render.output.as_deref())?;

    log::debug!("point cloud spans {:?} to {:?}", min, max);

    let rips = RipsComplex::from_points(points, config.max_edge_length)?;
    log::info!(
        "building rips complex: {} points, edge length ≤ {}, dimension ≤ {}",
        rips.n_points(),
        rips.max_edge_length(),
        config.complex_dimension
    );

    let tree = rips.create_simplex_tree(config.complex_dimension)?;

    log::info!(
        "complex has {} simplices, dimension {}",
        tree.num_simplices(),
        tree.dimension()
    );
    for d in 0..=tree.dimension() {
        log::debug!("  dimension {}: {} simplices", d, tree.count(d));
    }

    let summary = Renderer::new(&tree, points, config.render.clone()).render()?;

    log::info!(
        "drew {} simplices ({} points, {} edges, {} faces)",
        summary.simplices(),
        summary.points,
        summary.edges,
        summary.faces
    );

    Ok(summary)
}
