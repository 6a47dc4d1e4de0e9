//! Draw Complex: Rips Complex of Two Nested Spheres
//!
//! ## Protocol
//!
//! 1. Sample 200 points on the unit sphere and 100 on a sphere of radius 0.5
//! 2. Build the Vietoris-Rips complex up to the requested dimension
//! 3. Draw every simplex born at or below `--max-epsilon`
//! 4. Save to `--output`, or open a window (requires the `viewer` feature)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tda_draw_complex::{
    CanvasConfig, LoggingConfig, PipelineConfig, RenderConfig, init_logging, pipeline,
    sample_dataset, DEFAULT_SEED,
};

#[derive(Parser, Debug)]
#[command(
    name = "draw_complex",
    about = "Draw the Vietoris-Rips complex of a sampled point cloud",
    version
)]
struct Cli {
    /// Image file to write (png, jpg, bmp, tiff); opens a window when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Draw simplices born at or below this scale
    #[arg(long, default_value_t = 0.5)]
    max_epsilon: f64,

    /// Draw the whole filtration, ignoring --max-epsilon
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Longest edge admitted in the Rips complex
    #[arg(long, default_value_t = 0.5)]
    max_edge_length: f64,

    /// Highest simplex dimension to build
    #[arg(short = 'd', long = "dimension", default_value_t = 4)]
    dimension: usize,

    /// Seed for the sampled spheres
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Log filter, e.g. "debug" or "tda_draw_complex=debug" (overrides RUST_LOG)
    #[arg(long = "log", value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let points = sample_dataset(cli.seed).context("failed to sample point cloud")?;
    log::info!("sampled {} points (seed {})", points.len(), cli.seed);

    let config = PipelineConfig {
        complex_dimension: cli.dimension,
        max_edge_length: cli.max_edge_length,
        render: RenderConfig {
            max_epsilon: (!cli.all).then_some(cli.max_epsilon),
            output: cli.output.clone(),
            canvas: CanvasConfig {
                width: cli.width,
                height: cli.height,
                ..CanvasConfig::default()
            },
            title: if cli.all {
                "Rips complex".to_string()
            } else {
                format!("Rips complex (ε ≤ {})", cli.max_epsilon)
            },
        },
    };

    let summary = pipeline::run(&points, &config).context("failed to draw complex")?;

    println!("Simplices drawn:");
    println!("  points    {}", summary.points);
    println!("  edges     {}", summary.edges);
    println!("  faces     {} ({} triangles)", summary.faces, summary.triangles);
    if let Some(value) = summary.stopped_at {
        println!("  stopped at filtration value {:.4}", value);
    }
    if let Some(path) = &cli.output {
        println!("Saved to {}", path.display());
    }

    Ok(())
}
