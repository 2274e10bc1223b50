//! Ray representation and intersection dispatch.

use std::hash::{Hash, Hasher};

use glint_geom::{Aabb3, Plane, PlaneBoundedVolume, Sphere};
use glint_math::{Point3, Vec3};

use crate::intersect;

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given and is not normalized: a ray has
/// no length, so the direction goes to infinity. A zero-length
/// direction is accepted but yields no meaningful intersection
/// results; callers are expected to avoid it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_direction: Vec3,
    /// Sign of direction components (0 if positive, 1 if negative).
    sign: [usize; 3],
}

fn direction_cache(direction: &Vec3) -> (Vec3, [usize; 3]) {
    let inv = Vec3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z);
    let sign = [
        if inv.x < 0.0 { 1 } else { 0 },
        if inv.y < 0.0 { 1 } else { 0 },
        if inv.z < 0.0 { 1 } else { 0 },
    ];
    (inv, sign)
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction is taken as-is; no normalization or validation is
    /// performed.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        let (inv_direction, sign) = direction_cache(&direction);
        Self {
            origin,
            direction,
            inv_direction,
            sign,
        }
    }

    /// Origin point of the ray.
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Move the ray origin.
    pub fn set_origin(&mut self, origin: Point3) {
        self.origin = origin;
    }

    /// Direction the ray points in. Not necessarily unit length.
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Change the ray direction. Refreshes the cached reciprocals used
    /// by the AABB slab test.
    pub fn set_direction(&mut self, direction: Vec3) {
        let (inv_direction, sign) = direction_cache(&direction);
        self.direction = direction;
        self.inv_direction = inv_direction;
        self.sign = sign;
    }

    pub(crate) fn inv_direction(&self) -> &Vec3 {
        &self.inv_direction
    }

    pub(crate) fn sign(&self) -> &[usize; 3] {
        &self.sign
    }

    /// Evaluate the ray at parameter `t`: `origin + direction * t`.
    ///
    /// `t` is unrestricted; negative values give points behind the
    /// origin.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Test whether this ray intersects the given box.
    ///
    /// The result contains whether there was a hit, and the ray
    /// parameter at which the hit happened.
    pub fn intersects_box(&self, aabb: &Aabb3) -> IntersectResult {
        intersect::intersect_aabb(self, aabb)
    }

    /// Test whether this ray intersects the given plane.
    ///
    /// The result contains whether there was a hit, and the ray
    /// parameter at which the hit happened.
    pub fn intersects_plane(&self, plane: &Plane) -> IntersectResult {
        intersect::intersect_plane(self, plane)
    }

    /// Test whether this ray intersects the given sphere.
    ///
    /// The result contains whether there was a hit, and the ray
    /// parameter at which the hit happened.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> IntersectResult {
        intersect::intersect_sphere(self, sphere)
    }

    /// Test whether this ray intersects the given plane-bounded volume.
    ///
    /// The result contains whether there was a hit, and the ray
    /// parameter at which the hit happened.
    pub fn intersects_volume(&self, volume: &PlaneBoundedVolume) -> IntersectResult {
        intersect::intersect_volume(self, volume)
    }
}

impl Default for Ray {
    /// Ray at the world origin pointing along +Z.
    fn default() -> Self {
        Self::new(Point3::origin(), Vec3::z())
    }
}

impl PartialEq for Ray {
    /// Exact componentwise comparison of origin and direction. The
    /// derived slab cache is excluded; it is a pure function of the
    /// direction.
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

impl Hash for Ray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in [
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.direction.x,
            self.direction.y,
            self.direction.z,
        ] {
            // 0.0 and -0.0 compare equal, so they must hash equal;
            // adding 0.0 collapses the negative zero.
            (c + 0.0).to_bits().hash(state);
        }
    }
}

/// Result of a ray-shape intersection test.
///
/// `distance` is present exactly when `hit` is true, and holds the ray
/// parameter `t` of the nearest intersection with `t >= 0`. Since ray
/// directions are not normalized, `t` is in units of the direction
/// vector's length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectResult {
    /// Whether the ray intersects the shape.
    pub hit: bool,
    /// Ray parameter of the nearest intersection, when `hit` is true.
    pub distance: Option<f64>,
}

impl IntersectResult {
    /// A hit at the given ray parameter.
    pub fn hit(distance: f64) -> Self {
        Self {
            hit: true,
            distance: Some(distance),
        }
    }

    /// No intersection.
    pub fn miss() -> Self {
        Self {
            hit: false,
            distance: None,
        }
    }
}
