#![warn(missing_docs)]

//! Math types for the glint geometry kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types
//! for 3D geometry: points, vectors, directions, and tolerance
//! constants.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-10, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_tolerance_is_zero() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(1e-12));
        assert!(!tol.is_zero(1e-3));
    }

    #[test]
    fn test_tolerance_angles_equal() {
        let tol = Tolerance::DEFAULT;
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!(tol.angles_equal(quarter, quarter + 1e-12));
        assert!(!tol.angles_equal(quarter, quarter + 1e-6));
    }
}
