//! Colors, Opacity and Line Styles
//!
//! ## Color policy
//!
//! Dimensions 0..=7 cycle through a fixed 7-color palette
//! (`r c r y g b m`); dimension 7 wraps back to red. Dimensions above 7
//! sample the `hsv` color map at `dim / max_dim`. The continuous branch is
//! only reachable for complexes of dimension 8 or more.
//!
//! ## Opacity policy
//!
//!   α(d) = 1 - (0.75 / D) · d
//!
//! where D is the maximum dimension of the complex, so the top-dimensional
//! faces are drawn at α = 0.25.

/// Line width used for 1-simplices, in points
pub const EDGE_LINE_WIDTH: f64 = 0.21;

/// Edge width of triangulated faces, in points
pub const FACE_EDGE_WIDTH: f64 = 1.0;

/// Scatter marker area, in points²
pub const MARKER_SIZE: f64 = 20.0;

/// Straight-alpha RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 0.75, 0.75);
    pub const YELLOW: Color = Color::rgb(0.75, 0.75, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(0.75, 0.0, 0.75);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const PANE_GRAY: Color = Color::rgb(0.8, 0.8, 0.8);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha replaced; clamped into [0, 1]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) as f32 };
        Self { a, ..self }
    }

    /// 8-bit RGBA
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Stroke pattern of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    /// On/off lengths in units of line width, `None` for solid lines
    pub fn dash_pattern(&self) -> Option<[f64; 2]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some([3.7, 1.6]),
        }
    }
}

pub const PALETTE: [Color; 7] = [
    Color::RED,
    Color::CYAN,
    Color::RED,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::MAGENTA,
];

/// Color of a simplex of dimension `dim` in a complex of dimension `max_dim`
pub fn color_by_dimension(dim: usize, max_dim: usize) -> Color {
    if dim > 7 {
        hsv_colormap(dim as f64 / max_dim as f64)
    } else {
        PALETTE[dim % 7]
    }
}

/// Opacity of faces decomposed from a simplex of dimension `dim`
///
/// Not clamped; compositing clamps into [0, 1]. A 0-dimensional complex
/// has no faces, so `max_dim == 0` returns full opacity.
pub fn face_alpha(dim: usize, max_dim: usize) -> f64 {
    if max_dim == 0 {
        return 1.0;
    }
    1.0 - (0.75 / max_dim as f64) * dim as f64
}

/// Full-saturation hue sweep, red at both ends
pub fn hsv_colormap(x: f64) -> Color {
    let h = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) } * 6.0;
    let sector = h.floor();
    let f = (h - sector) as f32;

    let (r, g, b) = match sector as u32 % 6 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };

    Color::rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_depends_on_dimension_only() {
        for dim in 0..7 {
            let reference = color_by_dimension(dim, 7);
            for max_dim in [0, 1, 2, 4, 7, 12, 100] {
                assert_eq!(color_by_dimension(dim, max_dim), reference);
            }
        }

        assert_eq!(color_by_dimension(0, 3), Color::RED);
        assert_eq!(color_by_dimension(1, 3), Color::CYAN);
        assert_eq!(color_by_dimension(2, 3), Color::RED);
        assert_eq!(color_by_dimension(6, 9), Color::MAGENTA);
    }

    #[test]
    fn test_dimension_seven_stays_cyclic() {
        assert_eq!(color_by_dimension(7, 7), Color::RED);
        assert_eq!(color_by_dimension(7, 20), Color::RED);
    }

    #[test]
    fn test_high_dimensions_use_colormap() {
        // 9 / 12 = 0.75 of the hue circle: between blue and magenta
        let c = color_by_dimension(9, 12);
        assert_eq!(c, hsv_colormap(0.75));
        assert!(c.b > 0.99 && c.g < 0.01);
    }

    #[test]
    fn test_face_alpha() {
        assert_eq!(face_alpha(0, 4), 1.0);
        assert_eq!(face_alpha(2, 4), 1.0 - (0.75 / 4.0) * 2.0);
        assert_eq!(face_alpha(4, 4), 0.25);
        assert_eq!(face_alpha(3, 3), 1.0 - (0.75 / 3.0) * 3.0);
    }

    #[test]
    fn test_alpha_can_go_negative() {
        // Inconsistent input (dim > max_dim) is passed through
        assert!(face_alpha(10, 2) < 0.0);
        assert_eq!(Color::RED.with_alpha(face_alpha(10, 2)).a, 0.0);
    }
}
