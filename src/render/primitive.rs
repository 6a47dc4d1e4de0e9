//! Drawable primitives, one variant per simplex shape
//!
//! | dimension | variant | drawn as                                  |
//! |-----------|---------|-------------------------------------------|
//! | 0         | Point   | scatter marker                            |
//! | 1         | Edge    | thin dashed segment                       |
//! | ≥ 2       | Face    | every 3-vertex face as a translucent mesh |

use super::canvas::Canvas3D;
use super::style::{
    Color, EDGE_LINE_WIDTH, FACE_EDGE_WIDTH, LineStyle, MARKER_SIZE, color_by_dimension, face_alpha,
};
use crate::error::{RenderError, Result};
use crate::geometry::{Point3, PointCloud};
use crate::topology::Simplex;

/// A simplex resolved to coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point(Point3),
    Edge([Point3; 2]),
    Face {
        /// Dimension of the source simplex
        dimension: usize,
        /// Its C(d+1, 3) triangular faces
        triangles: Vec<[Point3; 3]>,
    },
}

impl Primitive {
    /// Resolve a simplex against the point cloud
    pub fn from_simplex(simplex: &Simplex, points: &PointCloud) -> Result<Self> {
        let dimension = simplex.dimension().ok_or(RenderError::EmptySimplex)?;
        let v = simplex.vertices();

        let primitive = match dimension {
            0 => Primitive::Point(points.point(v[0])?),
            1 => Primitive::Edge([points.point(v[0])?, points.point(v[1])?]),
            _ => {
                let triangles = simplex
                    .triangles()
                    .map(|[a, b, c]| -> Result<[Point3; 3]> {
                        Ok([points.point(a)?, points.point(b)?, points.point(c)?])
                    })
                    .collect::<Result<Vec<_>>>()?;
                Primitive::Face { dimension, triangles }
            }
        };

        Ok(primitive)
    }

    pub fn dimension(&self) -> usize {
        match self {
            Primitive::Point(_) => 0,
            Primitive::Edge(_) => 1,
            Primitive::Face { dimension, .. } => *dimension,
        }
    }

    /// Issue the drawing call for this primitive
    pub fn draw(self, canvas: &mut Canvas3D, max_dimension: usize) {
        let color = color_by_dimension(self.dimension(), max_dimension);

        match self {
            Primitive::Point(p) => canvas.scatter(p, color, MARKER_SIZE),
            Primitive::Edge([a, b]) => {
                canvas.plot_line(a, b, color, EDGE_LINE_WIDTH, LineStyle::Dashed)
            }
            Primitive::Face { dimension, triangles } => canvas.plot_trisurf(
                triangles,
                color,
                face_alpha(dimension, max_dimension),
                Color::BLACK,
                FACE_EDGE_WIDTH,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::{Artist, CanvasConfig};

    fn tetra_cloud() -> PointCloud {
        PointCloud::from_points(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_dispatch_by_dimension() {
        let cloud = tetra_cloud();

        let p = Primitive::from_simplex(&Simplex::new([2]), &cloud).unwrap();
        assert_eq!(p, Primitive::Point([0.0, 1.0, 0.0]));

        let e = Primitive::from_simplex(&Simplex::new([0, 3]), &cloud).unwrap();
        assert_eq!(e, Primitive::Edge([[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));

        let f = Primitive::from_simplex(&Simplex::new([0, 1, 2]), &cloud).unwrap();
        match f {
            Primitive::Face { dimension, triangles } => {
                assert_eq!(dimension, 2);
                assert_eq!(triangles.len(), 1);
            }
            other => panic!("expected a face, got {:?}", other),
        }
    }

    #[test]
    fn test_tetrahedron_face_count() {
        let cloud = tetra_cloud();
        let f = Primitive::from_simplex(&Simplex::new([0, 1, 2, 3]), &cloud).unwrap();
        match f {
            Primitive::Face { dimension, triangles } => {
                assert_eq!(dimension, 3);
                assert_eq!(triangles.len(), 4);
            }
            other => panic!("expected a face, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_vertex() {
        let cloud = tetra_cloud();
        let result = Primitive::from_simplex(&Simplex::new([1, 2, 9]), &cloud);
        assert!(matches!(
            result,
            Err(RenderError::PointIndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn test_empty_simplex() {
        let cloud = tetra_cloud();
        let result = Primitive::from_simplex(&Simplex::new(Vec::new()), &cloud);
        assert!(matches!(result, Err(RenderError::EmptySimplex)));
    }

    #[test]
    fn test_draw_styles() {
        let cloud = tetra_cloud();
        let mut canvas = Canvas3D::new(CanvasConfig::default()).unwrap();

        Primitive::from_simplex(&Simplex::new([0, 1]), &cloud)
            .unwrap()
            .draw(&mut canvas, 3);
        Primitive::from_simplex(&Simplex::new([0, 1, 2, 3]), &cloud)
            .unwrap()
            .draw(&mut canvas, 3);

        match &canvas.artists()[0] {
            Artist::Line { width, style, color, .. } => {
                assert_eq!(*width, 0.21);
                assert_eq!(*style, LineStyle::Dashed);
                assert_eq!(*color, Color::CYAN);
            }
            other => panic!("expected a line, got {:?}", other),
        }

        match &canvas.artists()[1] {
            Artist::Surface { alpha, color, edge_color, .. } => {
                assert_eq!(*alpha, 0.25);
                assert_eq!(*color, Color::YELLOW);
                assert_eq!(*edge_color, Color::BLACK);
            }
            other => panic!("expected a surface, got {:?}", other),
        }
    }
}
