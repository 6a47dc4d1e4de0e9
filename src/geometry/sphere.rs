//! Sample Point Clouds: Random Spheres
//!
//! Points are sampled uniformly on a sphere of radius `scale`:
//!
//!   z ~ U[-1, 1],  θ ~ U[-π, π]
//!   x = sin θ · √(1 - z²),  y = cos θ · √(1 - z²)
//!
//! Two spheres of different radii sharing a center give a cloud with two
//! nested voids, which makes a readable Rips complex.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

use super::{Point3, PointCloud};
use crate::error::{RenderError, Result};

/// Seed used by the sample dataset
pub const DEFAULT_SEED: u64 = 19_680_801;

/// Sample `n` points uniformly on a sphere of radius `scale`
pub fn random_sphere<R: Rng + ?Sized>(n: usize, scale: f64, rng: &mut R) -> Result<Vec<Point3>> {
    let z_dist = Uniform::new_inclusive(-1.0, 1.0)
        .map_err(|e| RenderError::InvalidConfig(format!("sphere z range: {e}")))?;
    let theta_dist = Uniform::new_inclusive(-PI, PI)
        .map_err(|e| RenderError::InvalidConfig(format!("sphere angle range: {e}")))?;

    let z: Vec<f64> = (0..n).map(|_| z_dist.sample(rng)).collect();
    let theta: Vec<f64> = (0..n).map(|_| theta_dist.sample(rng)).collect();

    let points = z
        .iter()
        .zip(theta.iter())
        .map(|(&z, &theta)| {
            let r = (1.0 - z * z).sqrt();
            [theta.sin() * r * scale, theta.cos() * r * scale, z * scale]
        })
        .collect();

    Ok(points)
}

/// Concatenate one sphere per `(size, scale)` pair
///
/// # Arguments
/// * `sizes` - Number of points on each sphere
/// * `scales` - Radius of each sphere
pub fn intersected_spheres<R: Rng + ?Sized>(
    sizes: &[usize],
    scales: &[f64],
    rng: &mut R,
) -> Result<PointCloud> {
    if sizes.len() != scales.len() {
        return Err(RenderError::InvalidConfig(format!(
            "{} sphere sizes but {} scales",
            sizes.len(),
            scales.len()
        )));
    }

    let mut points = Vec::with_capacity(sizes.iter().sum());
    for (&size, &scale) in sizes.iter().zip(scales) {
        points.extend(random_sphere(size, scale, rng)?);
    }

    Ok(PointCloud::from_points(&points))
}

/// Two concentric spheres: 200 points at radius 1, 100 at radius 0.5
pub fn sample_dataset(seed: u64) -> Result<PointCloud> {
    let mut rng = StdRng::seed_from_u64(seed);
    intersected_spheres(&[200, 100], &[1.0, 0.5], &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_lie_on_sphere() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = random_sphere(50, 2.0, &mut rng).unwrap();

        assert_eq!(points.len(), 50);
        for p in points {
            let radius = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((radius - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_dataset_is_reproducible() {
        let a = sample_dataset(DEFAULT_SEED).unwrap();
        let b = sample_dataset(DEFAULT_SEED).unwrap();

        assert_eq!(a.len(), 300);
        assert_eq!(a.as_array(), b.as_array());

        // Second sphere has half the radius
        let p = a.point(250).unwrap();
        let radius = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((radius - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = intersected_spheres(&[10, 10], &[1.0], &mut rng);
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }
}
