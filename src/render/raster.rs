//! Software rasterization onto an RGBA image
//!
//! All routines composite with straight-alpha "over" and clip to the image.
//! Coverage is estimated from the distance of each pixel center to the
//! shape, which gives cheap anti-aliasing for markers and strokes.

use image::{Rgba, RgbaImage};

use super::style::Color;

/// Composite `color` over the pixel at (x, y) with extra `coverage`
pub fn blend(img: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }

    let src_a = (color.a * coverage).clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let px = img.get_pixel_mut(x as u32, y as u32);
    let [dr, dg, db, da] = px.0.map(|c| c as f32 / 255.0);

    let out_a = src_a + da * (1.0 - src_a);
    let mix = |s: f32, d: f32| {
        if out_a > 0.0 {
            (s * src_a + d * da * (1.0 - src_a)) / out_a
        } else {
            0.0
        }
    };

    *px = Rgba(
        Color {
            r: mix(color.r, dr),
            g: mix(color.g, dg),
            b: mix(color.b, db),
            a: out_a,
        }
        .to_rgba8(),
    );
}

/// Pixel-index range covering [lo, hi], clipped to [0, limit)
fn span(lo: f64, hi: f64, limit: u32) -> std::ops::Range<i64> {
    let start = lo.floor().max(0.0) as i64;
    let end = (hi.ceil() + 1.0).min(limit as f64).max(0.0) as i64;
    start..end.max(start)
}

/// Filled anti-aliased disk
pub fn fill_disk(img: &mut RgbaImage, center: (f64, f64), radius: f64, color: Color) {
    let (cx, cy) = center;
    let reach = radius + 1.0;

    for y in span(cy - reach, cy + reach, img.height()) {
        for x in span(cx - reach, cx + reach, img.width()) {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0) as f32;
            if coverage > 0.0 {
                blend(img, x, y, color, coverage);
            }
        }
    }
}

/// Stroke the segment a-b
///
/// `width` is in pixels; strokes thinner than a pixel are drawn one pixel
/// wide at proportionally reduced coverage. `dash` holds on/off lengths in
/// pixels.
pub fn stroke_segment(
    img: &mut RgbaImage,
    a: (f64, f64),
    b: (f64, f64),
    width: f64,
    color: Color,
    dash: Option<[f64; 2]>,
) {
    let (vx, vy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = vx * vx + vy * vy;
    let len = len_sq.sqrt();

    let half = (width / 2.0).max(0.5);
    let intensity = width.min(1.0) as f32;

    if len < 1e-9 {
        fill_disk(img, a, half, color.with_alpha(color.a as f64 * intensity as f64));
        return;
    }

    let reach = half + 1.0;
    let ys = span(a.1.min(b.1) - reach, a.1.max(b.1) + reach, img.height());
    let xs = span(a.0.min(b.0) - reach, a.0.max(b.0) + reach, img.width());

    for y in ys {
        for x in xs.clone() {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;

            let t = (((px - a.0) * vx + (py - a.1) * vy) / len_sq).clamp(0.0, 1.0);

            if let Some([on, off]) = dash {
                let period = on + off;
                if period > 0.0 && (t * len) % period >= on {
                    continue;
                }
            }

            let (qx, qy) = (a.0 + t * vx, a.1 + t * vy);
            let d = ((px - qx).powi(2) + (py - qy).powi(2)).sqrt();
            let coverage = (half + 0.5 - d).clamp(0.0, 1.0) as f32 * intensity;
            if coverage > 0.0 {
                blend(img, x, y, color, coverage);
            }
        }
    }
}

/// Fill a triangle; degenerate (zero-area) triangles draw nothing
pub fn fill_triangle(img: &mut RgbaImage, tri: [(f64, f64); 3], color: Color) {
    let [p0, p1, p2] = tri;
    let area = edge(p0, p1, p2);
    if area.abs() < 1e-12 {
        return;
    }
    let sign = area.signum();

    let min_x = p0.0.min(p1.0).min(p2.0);
    let max_x = p0.0.max(p1.0).max(p2.0);
    let min_y = p0.1.min(p1.1).min(p2.1);
    let max_y = p0.1.max(p1.1).max(p2.1);

    for y in span(min_y, max_y, img.height()) {
        for x in span(min_x, max_x, img.width()) {
            let p = (x as f64 + 0.5, y as f64 + 0.5);
            let w0 = edge(p1, p2, p) * sign;
            let w1 = edge(p2, p0, p) * sign;
            let w2 = edge(p0, p1, p) * sign;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                blend(img, x, y, color, 1.0);
            }
        }
    }
}

/// Twice the signed area of (a, b, c)
fn edge(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut img = white(1, 1);
        blend(&mut img, 0, 0, Color::BLACK.with_alpha(0.5), 1.0);
        let px = img.get_pixel(0, 0).0;
        assert!((px[0] as i32 - 128).abs() <= 1);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_blend_clips() {
        let mut img = white(2, 2);
        blend(&mut img, -1, 0, Color::BLACK, 1.0);
        blend(&mut img, 0, 2, Color::BLACK, 1.0);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_fill_triangle_either_winding() {
        for tri in [
            [(1.0, 1.0), (9.0, 1.0), (1.0, 9.0)],
            [(1.0, 1.0), (1.0, 9.0), (9.0, 1.0)],
        ] {
            let mut img = white(10, 10);
            fill_triangle(&mut img, tri, Color::BLUE);
            assert_eq!(img.get_pixel(2, 2).0, [0, 0, 255, 255]);
            assert_eq!(img.get_pixel(8, 8).0, [255, 255, 255, 255]);
        }
    }

    #[test]
    fn test_degenerate_triangle_draws_nothing() {
        let mut img = white(10, 10);
        fill_triangle(&mut img, [(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], Color::BLUE);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_dashed_segment_has_gaps() {
        let mut solid = white(40, 5);
        let mut dashed = white(40, 5);
        stroke_segment(&mut solid, (0.0, 2.5), (40.0, 2.5), 2.0, Color::BLACK, None);
        stroke_segment(&mut dashed, (0.0, 2.5), (40.0, 2.5), 2.0, Color::BLACK, Some([4.0, 4.0]));

        let inked = |img: &RgbaImage| (0..40).filter(|&x| img.get_pixel(x, 2).0[0] < 128).count();
        assert_eq!(inked(&solid), 40);
        assert!(inked(&dashed) > 10 && inked(&dashed) < 30);
    }

    #[test]
    fn test_disk_center_is_opaque() {
        let mut img = white(11, 11);
        fill_disk(&mut img, (5.5, 5.5), 3.0, Color::RED);
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
