//! Point Cloud: the coordinates a complex indexes into
//!
//! A simplex only stores vertex indices; the coordinates live here. The
//! cloud is immutable once constructed.

use ndarray::{Array2, ArrayView1};

use crate::error::{RenderError, Result};

/// A 3D coordinate (x, y, z)
pub type Point3 = [f64; 3];

/// Ordered set of 3D points stored as an `[n, 3]` matrix
#[derive(Debug, Clone)]
pub struct PointCloud {
    /// Point coordinates [N, 3]
    points: Array2<f64>,
}

impl PointCloud {
    /// Wrap an `[n, 3]` coordinate matrix
    ///
    /// An empty matrix is accepted here; callers that build a complex from
    /// the cloud reject it (see `pipeline::run`).
    pub fn new(points: Array2<f64>) -> Result<Self> {
        if points.ncols() != 3 {
            return Err(RenderError::InvalidPointDimension {
                found: points.ncols(),
            });
        }
        Ok(Self { points })
    }

    /// Build from a slice of coordinates
    pub fn from_points(points: &[Point3]) -> Self {
        let flat: Vec<f64> = points.iter().flat_map(|p| p.iter().copied()).collect();
        // Shape always matches the flattened length.
        let points = Array2::from_shape_vec((points.len(), 3), flat)
            .unwrap_or_else(|_| Array2::zeros((0, 3)));
        Self { points }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Coordinates of point `index`
    pub fn point(&self, index: usize) -> Result<Point3> {
        if index >= self.len() {
            return Err(RenderError::PointIndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let row = self.points.row(index);
        Ok([row[0], row[1], row[2]])
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.points.rows().into_iter()
    }

    /// Underlying `[n, 3]` matrix
    pub fn as_array(&self) -> &Array2<f64> {
        &self.points
    }

    /// Axis-aligned bounding box as (min, max), `None` when empty
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        if self.is_empty() {
            return None;
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for row in self.rows() {
            for axis in 0..3 {
                min[axis] = min[axis].min(row[axis]);
                max[axis] = max[axis].max(row[axis]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_point_lookup() {
        let cloud = PointCloud::new(array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.point(1).unwrap(), [3.0, 4.0, 5.0]);

        match cloud.point(2) {
            Err(RenderError::PointIndexOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_planar_points() {
        let result = PointCloud::new(array![[0.0, 0.0], [1.0, 0.0]]);
        assert!(matches!(result, Err(RenderError::InvalidPointDimension { found: 2 })));
    }

    #[test]
    fn test_bounds() {
        let cloud = PointCloud::from_points(&[[1.0, -2.0, 0.5], [-1.0, 3.0, 0.0]]);
        let (min, max) = cloud.bounds().unwrap();
        assert_eq!(min, [-1.0, -2.0, 0.0]);
        assert_eq!(max, [1.0, 3.0, 0.5]);

        assert!(PointCloud::from_points(&[]).bounds().is_none());
    }
}
