//! Geometry Module: Point Clouds
//!
//! The coordinates a simplicial complex indexes into, plus seeded
//! generators for sample clouds:
//!
//! - **PointCloud**: immutable `[n, 3]` coordinate matrix
//! - **Spheres**: uniform samples on one or more concentric spheres

mod point_cloud;
mod sphere;

pub use point_cloud::{Point3, PointCloud};
pub use sphere::{DEFAULT_SEED, intersected_spheres, random_sphere, sample_dataset};
