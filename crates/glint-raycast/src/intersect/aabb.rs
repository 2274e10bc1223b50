//! Ray-box intersection (slab method).

use glint_geom::Aabb3;

use crate::{IntersectResult, Ray};

/// Intersect a ray with an axis-aligned box.
///
/// Uses the slab method with the ray's precomputed reciprocal
/// direction. A ray starting inside the box hits at distance 0.
/// Handles infinite reciprocals correctly for axis-aligned rays.
pub fn intersect_aabb(ray: &Ray, aabb: &Aabb3) -> IntersectResult {
    let bounds = [aabb.min, aabb.max];
    let inv = ray.inv_direction();
    let sign = ray.sign();
    let origin = ray.origin();

    let tx1 = (bounds[sign[0]].x - origin.x) * inv.x;
    let tx2 = (bounds[1 - sign[0]].x - origin.x) * inv.x;

    let mut t_min = tx1;
    let mut t_max = tx2;

    let ty1 = (bounds[sign[1]].y - origin.y) * inv.y;
    let ty2 = (bounds[1 - sign[1]].y - origin.y) * inv.y;

    t_min = t_min.max(ty1);
    t_max = t_max.min(ty2);

    let tz1 = (bounds[sign[2]].z - origin.z) * inv.z;
    let tz2 = (bounds[1 - sign[2]].z - origin.z) * inv.z;

    t_min = t_min.max(tz1);
    t_max = t_max.min(tz2);

    if t_max >= t_min && t_max >= 0.0 {
        IntersectResult::hit(t_min.max(0.0))
    } else {
        IntersectResult::miss()
    }
}
