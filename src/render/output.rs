//! Presenting a finished canvas: written to a file, or shown in a window

use std::path::Path;

use super::canvas::Canvas3D;
use crate::error::{RenderError, Result};

/// Fail early when there is nowhere to send the plot
///
/// Without an output path the plot needs a window, which only exists in
/// builds with the `viewer` feature.
pub fn ensure_presentable(output: Option<&Path>) -> Result<()> {
    if output.is_none() && !cfg!(feature = "viewer") {
        return Err(RenderError::ViewerUnavailable);
    }
    Ok(())
}

/// Save the canvas to `output`, or present it interactively when no path
/// is given. Exactly one of the two happens.
pub fn present(canvas: &Canvas3D, output: Option<&Path>, title: &str) -> Result<()> {
    match output {
        Some(path) => {
            canvas.save(path)?;
            log::info!(
                "saved {}x{} plot to {}",
                canvas.config().width,
                canvas.config().height,
                path.display()
            );
            Ok(())
        }
        None => show(canvas, title),
    }
}

#[cfg(feature = "viewer")]
fn show(canvas: &Canvas3D, title: &str) -> Result<()> {
    log::info!("opening viewer window \"{}\"", title);
    super::viewer::show(canvas.rasterize(), title)
}

#[cfg(not(feature = "viewer"))]
fn show(_canvas: &Canvas3D, _title: &str) -> Result<()> {
    Err(RenderError::ViewerUnavailable)
}
