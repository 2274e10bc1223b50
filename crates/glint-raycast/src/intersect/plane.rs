//! Ray-plane intersection (closed-form).

use glint_geom::Plane;

use crate::{IntersectResult, Ray};

/// Intersect a ray with a plane.
///
/// Reports a miss when the ray is parallel to the plane or the
/// intersection lies behind the ray origin. A ray starting on the
/// plane and crossing it hits at distance 0.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> IntersectResult {
    let normal = plane.normal.as_ref();
    let denom = ray.direction().dot(normal);

    // Ray is parallel to plane
    if denom.abs() < 1e-12 {
        return IntersectResult::miss();
    }

    let t = -plane.signed_distance(ray.origin()) / denom;

    // Intersection is behind ray origin
    if t < 0.0 {
        return IntersectResult::miss();
    }

    IntersectResult::hit(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Point3, Vec3};

    #[test]
    fn test_ray_plane_perpendicular() {
        let plane = Plane::xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let result = intersect_plane(&ray, &plane);
        assert!(result.hit);
        assert!((result.distance.unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let plane = Plane::xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_plane(&ray, &plane);
        assert!(!result.hit);
    }

    #[test]
    fn test_ray_plane_behind() {
        let plane = Plane::xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        let result = intersect_plane(&ray, &plane);
        assert!(!result.hit);
    }

    #[test]
    fn test_ray_plane_angled() {
        let plane = Plane::xy();
        // Unit diagonal direction: travels sqrt(2) per unit drop in z
        let dir = Vec3::new(1.0, 0.0, -1.0).normalize();
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), dir);
        let result = intersect_plane(&ray, &plane);
        assert!(result.hit);
        let expected = 10.0 * 2.0_f64.sqrt();
        assert!((result.distance.unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_origin_on_plane() {
        let plane = Plane::xy();
        let ray = Ray::new(Point3::new(3.0, 4.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let result = intersect_plane(&ray, &plane);
        assert!(result.hit);
        assert!(result.distance.unwrap().abs() < 1e-12);
    }
}
