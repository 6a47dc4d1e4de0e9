//! Canvas3D: the drawing surface of one render call
//!
//! Drawing calls are recorded as artists; nothing touches pixels until
//! `rasterize`. At that point the data box is autoscaled from the artists,
//! every primitive is projected, and primitives are painted back to front
//! (painter's algorithm, one depth per marker, segment or triangle).

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use super::camera::{Projection, View};
use super::raster;
use super::style::{Color, LineStyle};
use crate::error::{RenderError, Result};
use crate::geometry::Point3;

/// Box edges as pairs of corner indices (corner bit i = axis i at max)
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7),
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Image size, resolution and viewpoint of a canvas
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixels per inch; converts point sizes (1/72 in) to pixels
    pub dpi: f64,
    /// Camera angles
    pub view: View,
    pub background: Color,
    /// Draw the wireframe of the data box behind the artists
    pub draw_box: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            dpi: 100.0,
            view: View::default(),
            background: Color::WHITE,
            draw_box: true,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        Ok(())
    }

    fn points_to_pixels(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    /// Scatter marker; `size` is the marker area in points²
    Marker {
        position: Point3,
        color: Color,
        size: f64,
    },
    /// Line segment; `width` in points
    Line {
        from: Point3,
        to: Point3,
        color: Color,
        width: f64,
        style: LineStyle,
    },
    /// Triangulated surface with edged faces
    Surface {
        triangles: Vec<[Point3; 3]>,
        color: Color,
        alpha: f64,
        edge_color: Color,
        edge_width: f64,
    },
}

impl Artist {
    fn vertices(&self) -> Vec<Point3> {
        match self {
            Artist::Marker { position, .. } => vec![*position],
            Artist::Line { from, to, .. } => vec![*from, *to],
            Artist::Surface { triangles, .. } => triangles.iter().flatten().copied().collect(),
        }
    }
}

/// A projected primitive awaiting painting
enum Paint {
    Disk { center: (f64, f64), radius: f64, color: Color },
    Stroke { a: (f64, f64), b: (f64, f64), width: f64, color: Color, dash: Option<[f64; 2]> },
    Triangle { corners: [(f64, f64); 3], fill: Color, edge: Color, edge_width: f64 },
}

/// Exclusively-owned 3D axes for one render call
#[derive(Debug, Clone)]
pub struct Canvas3D {
    config: CanvasConfig,
    artists: Vec<Artist>,
}

impl Canvas3D {
    pub fn new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            artists: Vec::new(),
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Recorded artists in drawing order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Number of scatter markers drawn so far
    pub fn marker_count(&self) -> usize {
        self.artists
            .iter()
            .filter(|a| matches!(a, Artist::Marker { .. }))
            .count()
    }

    /// Add a scatter marker
    pub fn scatter(&mut self, position: Point3, color: Color, size: f64) {
        self.artists.push(Artist::Marker { position, color, size });
    }

    /// Add a line segment
    pub fn plot_line(&mut self, from: Point3, to: Point3, color: Color, width: f64, style: LineStyle) {
        self.artists.push(Artist::Line {
            from,
            to,
            color,
            width,
            style,
        });
    }

    /// Add a triangulated surface; `alpha` applies to faces and edges
    pub fn plot_trisurf(
        &mut self,
        triangles: Vec<[Point3; 3]>,
        color: Color,
        alpha: f64,
        edge_color: Color,
        edge_width: f64,
    ) {
        self.artists.push(Artist::Surface {
            triangles,
            color,
            alpha,
            edge_color,
            edge_width,
        });
    }

    /// Data bounds over all artists, `None` for an empty canvas
    pub fn data_bounds(&self) -> Option<(Point3, Point3)> {
        let mut points = self.artists.iter().flat_map(Artist::vertices).peekable();
        points.peek()?;

        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }

    /// Projection used by `rasterize`
    pub fn projection(&self) -> Projection {
        let bounds = self.data_bounds().unwrap_or(([0.0; 3], [1.0; 3]));
        Projection::fit(bounds, &self.config.view, self.config.width, self.config.height)
    }

    /// Paint all artists into a new image
    pub fn rasterize(&self) -> RgbaImage {
        let cfg = &self.config;
        let mut img = RgbaImage::from_pixel(cfg.width, cfg.height, Rgba(cfg.background.to_rgba8()));
        let proj = self.projection();

        if cfg.draw_box {
            let corners = proj.box_corners().map(|c| proj.project(c).xy());
            let width = cfg.points_to_pixels(0.8);
            for (i, j) in BOX_EDGES {
                raster::stroke_segment(&mut img, corners[i], corners[j], width, Color::PANE_GRAY, None);
            }
        }

        let mut queue: Vec<(f64, Paint)> = Vec::new();
        for artist in &self.artists {
            match artist {
                Artist::Marker { position, color, size } => {
                    let p = proj.project(*position);
                    let radius = cfg.points_to_pixels(size.max(0.0).sqrt() / 2.0);
                    queue.push((p.depth, Paint::Disk { center: p.xy(), radius, color: *color }));
                }
                Artist::Line { from, to, color, width, style } => {
                    let (a, b) = (proj.project(*from), proj.project(*to));
                    let width_px = cfg.points_to_pixels(*width);
                    let dash = style.dash_pattern().map(|pattern| {
                        pattern.map(|len| cfg.points_to_pixels(len * width).max(1.0))
                    });
                    queue.push((
                        (a.depth + b.depth) / 2.0,
                        Paint::Stroke { a: a.xy(), b: b.xy(), width: width_px, color: *color, dash },
                    ));
                }
                Artist::Surface { triangles, color, alpha, edge_color, edge_width } => {
                    let fill = color.with_alpha(*alpha);
                    let edge = edge_color.with_alpha(*alpha);
                    let edge_width = cfg.points_to_pixels(*edge_width);
                    for tri in triangles {
                        let projected = (*tri).map(|v| proj.project(v));
                        let depth = projected.iter().map(|p| p.depth).sum::<f64>() / 3.0;
                        queue.push((
                            depth,
                            Paint::Triangle {
                                corners: projected.map(|p| p.xy()),
                                fill,
                                edge,
                                edge_width,
                            },
                        ));
                    }
                }
            }
        }

        // Far to near; ties keep drawing order
        queue.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, paint) in queue {
            match paint {
                Paint::Disk { center, radius, color } => raster::fill_disk(&mut img, center, radius, color),
                Paint::Stroke { a, b, width, color, dash } => {
                    raster::stroke_segment(&mut img, a, b, width, color, dash)
                }
                Paint::Triangle { corners, fill, edge, edge_width } => {
                    raster::fill_triangle(&mut img, corners, fill);
                    for k in 0..3 {
                        raster::stroke_segment(&mut img, corners[k], corners[(k + 1) % 3], edge_width, edge, None);
                    }
                }
            }
        }

        img
    }

    /// Rasterize and write to `path`; the format follows the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        // Opaque output: JPEG and BMP encoders reject an alpha channel
        let rgb = DynamicImage::ImageRgba8(self.rasterize()).to_rgb8();
        rgb.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CanvasConfig {
        CanvasConfig {
            width: 64,
            height: 48,
            draw_box: false,
            ..CanvasConfig::default()
        }
    }

    #[test]
    fn test_rejects_empty_size() {
        let config = CanvasConfig { width: 0, ..CanvasConfig::default() };
        assert!(matches!(Canvas3D::new(config), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_canvas_is_background() {
        let canvas = Canvas3D::new(small()).unwrap();
        let img = canvas.rasterize();
        assert_eq!(img.dimensions(), (64, 48));
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_single_marker_at_center() {
        let mut canvas = Canvas3D::new(small()).unwrap();
        canvas.scatter([2.0, -1.0, 5.0], Color::RED, 20.0);

        assert_eq!(canvas.marker_count(), 1);
        let img = canvas.rasterize();
        assert_eq!(img.get_pixel(32, 24).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_bounds_cover_all_artists() {
        let mut canvas = Canvas3D::new(small()).unwrap();
        canvas.scatter([0.0, 0.0, 0.0], Color::RED, 20.0);
        canvas.plot_line([1.0, 2.0, 3.0], [-1.0, 0.5, 0.0], Color::CYAN, 0.21, LineStyle::Dashed);
        canvas.plot_trisurf(
            vec![[[0.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, -2.0]]],
            Color::RED,
            0.5,
            Color::BLACK,
            1.0,
        );

        let (min, max) = canvas.data_bounds().unwrap();
        assert_eq!(min, [-1.0, 0.0, -2.0]);
        assert_eq!(max, [1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_translucent_surface_tints_background() {
        let mut canvas = Canvas3D::new(small()).unwrap();
        canvas.plot_trisurf(
            vec![[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]],
            Color::BLUE,
            0.25,
            Color::BLACK,
            1.0,
        );

        let img = canvas.rasterize();
        let tinted = img.pixels().filter(|p| p.0[0] < 255 && p.0[2] == 255).count();
        assert!(tinted > 0);
        // Never fully opaque blue
        assert!(img.pixels().all(|p| p.0 != [0, 0, 255, 255]));
    }
}
