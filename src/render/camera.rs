//! Orthographic 3D Camera
//!
//! Data coordinates are first normalized per axis into the cube
//! [-0.5, 0.5]³ (each axis autoscaled independently), then viewed from
//! elevation φ and azimuth θ:
//!
//!   eye   = ( cos φ cos θ,  cos φ sin θ,  sin φ)
//!   right = (-sin θ,        cos θ,        0    )
//!   up    = (-sin φ cos θ, -sin φ sin θ,  cos φ)
//!
//! Screen x is the projection on `right`, screen y on `up`, and depth on
//! `eye` (larger is closer to the viewer).

use crate::geometry::Point3;

/// Half-diagonal of the normalized cube
const CUBE_RADIUS: f64 = 0.866_025_403_784_438_6;

/// Fraction of the shorter image side the cube may span
const FILL: f64 = 0.9;

/// Viewing angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -60.0,
        }
    }
}

/// A projected point: pixel position plus depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl ScreenPoint {
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Maps data coordinates to pixels for one image size and view
#[derive(Debug, Clone)]
pub struct Projection {
    center: Point3,
    extent: Point3,
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    scale: f64,
    origin: (f64, f64),
}

impl Projection {
    /// Fit the data box `(min, max)` into a `width` x `height` image
    pub fn fit(bounds: (Point3, Point3), view: &View, width: u32, height: u32) -> Self {
        let (min, max) = bounds;
        let mut center = [0.0; 3];
        let mut extent = [1.0; 3];
        for axis in 0..3 {
            center[axis] = (min[axis] + max[axis]) / 2.0;
            let span = max[axis] - min[axis];
            // Flat axes keep a unit span so they sit at the cube center
            if span.is_finite() && span > f64::EPSILON {
                extent[axis] = span;
            }
        }

        let (el, az) = (view.elevation.to_radians(), view.azimuth.to_radians());
        let eye = [el.cos() * az.cos(), el.cos() * az.sin(), el.sin()];
        let right = [-az.sin(), az.cos(), 0.0];
        let up = [-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos()];

        let side = width.min(height) as f64;
        let scale = FILL * side / (2.0 * CUBE_RADIUS);

        Self {
            center,
            extent,
            eye,
            right,
            up,
            scale,
            origin: (width as f64 / 2.0, height as f64 / 2.0),
        }
    }

    /// Data point to the normalized cube
    pub fn normalize(&self, p: Point3) -> [f64; 3] {
        [
            (p[0] - self.center[0]) / self.extent[0],
            (p[1] - self.center[1]) / self.extent[1],
            (p[2] - self.center[2]) / self.extent[2],
        ]
    }

    /// Data point to pixel coordinates (y grows downward)
    pub fn project(&self, p: Point3) -> ScreenPoint {
        let n = self.normalize(p);
        let x = dot(n, self.right);
        let y = dot(n, self.up);

        ScreenPoint {
            x: self.origin.0 + x * self.scale,
            y: self.origin.1 - y * self.scale,
            depth: dot(n, self.eye),
        }
    }

    /// The 8 corners of the data box
    pub fn box_corners(&self) -> [Point3; 8] {
        let mut corners = [[0.0; 3]; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            for axis in 0..3 {
                let sign = if (i >> axis) & 1 == 1 { 0.5 } else { -0.5 };
                corner[axis] = self.center[axis] + sign * self.extent[axis];
            }
        }
        corners
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> (Point3, Point3) {
        ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    #[test]
    fn test_center_maps_to_image_center() {
        let proj = Projection::fit(unit_box(), &View::default(), 640, 480);
        let p = proj.project([0.5, 0.5, 0.5]);

        assert!((p.x - 320.0).abs() < 1e-9);
        assert!((p.y - 240.0).abs() < 1e-9);
        assert!(p.depth.abs() < 1e-12);
    }

    #[test]
    fn test_corners_stay_inside_image() {
        let proj = Projection::fit(([-3.0, 0.0, 10.0], [5.0, 0.1, 12.0]), &View::default(), 300, 200);
        for corner in proj.box_corners() {
            let p = proj.project(corner);
            assert!(p.x >= 0.0 && p.x <= 300.0, "x = {}", p.x);
            assert!(p.y >= 0.0 && p.y <= 200.0, "y = {}", p.y);
        }
    }

    #[test]
    fn test_up_axis_points_up() {
        let proj = Projection::fit(unit_box(), &View::default(), 400, 400);
        let low = proj.project([0.5, 0.5, 0.0]);
        let high = proj.project([0.5, 0.5, 1.0]);
        assert!(high.y < low.y);
    }

    #[test]
    fn test_depth_orders_toward_viewer() {
        // Looking straight down the z axis
        let view = View { elevation: 90.0, azimuth: 0.0 };
        let proj = Projection::fit(unit_box(), &view, 100, 100);
        assert!(proj.project([0.5, 0.5, 1.0]).depth > proj.project([0.5, 0.5, 0.0]).depth);
    }

    #[test]
    fn test_flat_axis_is_centered() {
        let proj = Projection::fit(([0.0, 0.0, 2.0], [1.0, 1.0, 2.0]), &View::default(), 100, 100);
        assert_eq!(proj.normalize([1.0, 1.0, 2.0])[2], 0.0);
    }
}
