#![warn(missing_docs)]

//! Ray queries against analytic shapes for the glint geometry kernel.
//!
//! This crate provides the [`Ray`] value type and intersection tests
//! against the shapes in `glint-geom`. `Ray` itself performs no
//! geometric computation; each `intersects_*` method forwards to the
//! matching routine in [`intersect`].
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and direction
//! - [`IntersectResult`] - Uniform hit/miss result with hit distance
//! - [`intersect`] - Ray-shape intersection routines, one per shape
//!
//! # Example
//!
//! ```
//! use glint_raycast::Ray;
//! use glint_geom::Sphere;
//! use glint_math::{Point3, Vec3};
//!
//! let ray = Ray::new(
//!     Point3::new(-5.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! );
//!
//! let result = ray.intersects_sphere(&Sphere::unit());
//! assert!(result.hit);
//! ```

mod ray;
pub mod intersect;

pub use ray::{IntersectResult, Ray};
