#![warn(missing_docs)]

//! Analytic shape types for the glint geometry kernel.
//!
//! Provides the value types ray queries are tested against: infinite
//! planes, spheres, axis-aligned boxes, and convex plane-bounded
//! volumes. All types are plain data with read access for intersection
//! routines; none of them own any intersection math.

use glint_math::{Dir3, Point3, Tolerance, Vec3};

// =============================================================================
// Plane
// =============================================================================

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// The half-space the normal points into.
    Positive,
    /// The half-space opposite the normal.
    Negative,
    /// On the plane, within tolerance.
    OnPlane,
}

/// An infinite plane in Hessian normal form: `normal · p + d = 0`.
///
/// The normal is unit length; `d` is the negated distance from the
/// origin to the plane along the normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal of the plane.
    pub normal: Dir3,
    /// Plane constant: `normal · p + d = 0` for points `p` on the plane.
    pub d: f64,
}

impl Plane {
    /// Create a plane from a normal vector and plane constant.
    /// The normal does not need to be unit length.
    pub fn new(normal: Vec3, d: f64) -> Self {
        Self {
            normal: Dir3::new_normalize(normal),
            d,
        }
    }

    /// Create a plane from a point on the plane and a normal vector.
    pub fn from_point_normal(point: Point3, normal: Vec3) -> Self {
        let n = Dir3::new_normalize(normal);
        let d = -n.as_ref().dot(&point.coords);
        Self { normal: n, d }
    }

    /// Create a plane through three points, with the normal given by
    /// the right-hand winding `(b - a) × (c - a)`.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = (b - a).cross(&(c - a));
        Self::from_point_normal(a, normal)
    }

    /// XY plane through the origin (normal +Z).
    pub fn xy() -> Self {
        Self::new(Vec3::z(), 0.0)
    }

    /// XZ plane through the origin (normal +Y).
    pub fn xz() -> Self {
        Self::new(Vec3::y(), 0.0)
    }

    /// YZ plane through the origin (normal +X).
    pub fn yz() -> Self {
        Self::new(Vec3::x(), 0.0)
    }

    /// Signed distance from a point to this plane.
    ///
    /// Positive on the side the normal points into.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.as_ref().dot(&p.coords) + self.d
    }

    /// Classify which side of the plane a point lies on.
    pub fn side(&self, p: &Point3) -> PlaneSide {
        let dist = self.signed_distance(p);
        if Tolerance::DEFAULT.is_zero(dist) {
            PlaneSide::OnPlane
        } else if dist > 0.0 {
            PlaneSide::Positive
        } else {
            PlaneSide::Negative
        }
    }
}

// =============================================================================
// Sphere
// =============================================================================

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Unit sphere at the origin.
    pub fn unit() -> Self {
        Self::new(Point3::origin(), 1.0)
    }

    /// Test whether a point lies inside or on the sphere.
    pub fn contains_point(&self, p: &Point3) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }
}

// =============================================================================
// Axis-aligned box
// =============================================================================

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Aabb3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Expand the AABB by a tolerance in all directions.
    pub fn expand(&mut self, tol: f64) {
        self.min.x -= tol;
        self.min.y -= tol;
        self.min.z -= tol;
        self.max.x += tol;
        self.max.y += tol;
        self.max.z += tol;
    }

    /// Test whether a point lies inside or on the box.
    pub fn contains_point(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Edge lengths of the box along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }
}

// =============================================================================
// Plane-bounded volume
// =============================================================================

/// A convex volume bounded by a set of planes.
///
/// Every plane normal points out of the volume: a point is inside when
/// its signed distance to every plane is non-positive.
#[derive(Debug, Clone)]
pub struct PlaneBoundedVolume {
    /// Bounding planes, normals pointing outward.
    pub planes: Vec<Plane>,
}

impl PlaneBoundedVolume {
    /// Create a volume from a set of outward-facing planes.
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    /// The six outward-facing planes of an axis-aligned box.
    pub fn from_aabb(aabb: &Aabb3) -> Self {
        let planes = vec![
            Plane::from_point_normal(aabb.max, Vec3::x()),
            Plane::from_point_normal(aabb.min, -Vec3::x()),
            Plane::from_point_normal(aabb.max, Vec3::y()),
            Plane::from_point_normal(aabb.min, -Vec3::y()),
            Plane::from_point_normal(aabb.max, Vec3::z()),
            Plane::from_point_normal(aabb.min, -Vec3::z()),
        ];
        Self { planes }
    }

    /// Test whether a point lies inside or on the boundary of the volume.
    pub fn contains_point(&self, p: &Point3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(p) <= 0.0)
    }
}
