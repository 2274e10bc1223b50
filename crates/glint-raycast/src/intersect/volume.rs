//! Ray intersection with a convex plane-bounded volume.

use glint_geom::PlaneBoundedVolume;

use super::intersect_plane;
use crate::{IntersectResult, Ray};

/// Slack for the boundary test on candidate entry points, which lie
/// exactly on one of the planes.
const BOUNDARY_EPS: f64 = 1e-9;

/// Intersect a ray with a plane-bounded volume.
///
/// A ray starting inside the volume (including a volume with no
/// planes, which bounds all of space) hits at distance 0. Otherwise
/// the ray enters through one of the planes the origin lies outside
/// of; the nearest entry point that lies within every other plane is
/// reported.
pub fn intersect_volume(ray: &Ray, volume: &PlaneBoundedVolume) -> IntersectResult {
    if volume.contains_point(ray.origin()) {
        return IntersectResult::hit(0.0);
    }

    let mut nearest: Option<f64> = None;

    for (i, plane) in volume.planes.iter().enumerate() {
        // Only planes the origin is outside of can be entry faces
        if plane.signed_distance(ray.origin()) <= 0.0 {
            continue;
        }

        let result = intersect_plane(ray, plane);
        let Some(t) = result.distance else {
            continue;
        };

        let point = ray.point_at(t);
        let inside_rest = volume
            .planes
            .iter()
            .enumerate()
            .all(|(j, other)| j == i || other.signed_distance(&point) <= BOUNDARY_EPS);

        if inside_rest && nearest.map_or(true, |best| t < best) {
            nearest = Some(t);
        }
    }

    match nearest {
        Some(t) => IntersectResult::hit(t),
        None => IntersectResult::miss(),
    }
}
