#![warn(missing_docs)]

//! glint — small 3D geometry kernel
//!
//! Ray queries against analytic shapes (planes, spheres, axis-aligned
//! boxes, convex plane-bounded volumes), plus a pluggable log-target
//! subsystem.
//!
//! # Example
//!
//! ```rust
//! use glint::{Point3, Ray, Sphere, Vec3};
//!
//! let ray = Ray::new(
//!     Point3::new(-5.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! );
//!
//! let result = ray.intersects_sphere(&Sphere::unit());
//! assert!(result.hit);
//! assert!((result.distance.unwrap() - 4.0).abs() < 1e-10);
//! ```

pub use glint_geom::{Aabb3, Plane, PlaneBoundedVolume, PlaneSide, Sphere};
pub use glint_log::{
    ConsoleTarget, FacadeTarget, FileTarget, Level, LogConfig, LogError, LogRouter, LogTarget,
    TargetSettings, UnconfiguredTarget,
};
pub use glint_math::{Dir3, Point3, Tolerance, Vec3};
pub use glint_raycast::{intersect, IntersectResult, Ray};
