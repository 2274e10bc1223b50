//! Ray-sphere intersection (quadratic equation).

use glint_geom::Sphere;

use crate::{IntersectResult, Ray};

/// Intersect a ray with a sphere.
///
/// Solves the quadratic `|oc + t*d|^2 = r^2` and reports the nearest
/// intersection with `t >= 0`. A ray starting inside the sphere
/// reports the exit distance. A zero-length direction reports a miss.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> IntersectResult {
    let oc = ray.origin() - sphere.center;
    let d = ray.direction();

    // Directions are not normalized, so the leading coefficient is the
    // squared direction length. Zero means a degenerate ray.
    let a = d.dot(d);
    if a == 0.0 {
        return IntersectResult::miss();
    }

    let b = 2.0 * oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return IntersectResult::miss();
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    if t1 >= 0.0 {
        IntersectResult::hit(t1)
    } else if t2 >= 0.0 {
        IntersectResult::hit(t2)
    } else {
        IntersectResult::miss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Point3, Vec3};

    #[test]
    fn test_ray_sphere_through_center() {
        let sphere = Sphere::new(Point3::origin(), 5.0);
        // Ray from (-10, 0, 0) pointing +x, entering the sphere at x = -5
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &sphere);
        assert!(result.hit);
        assert!((result.distance.unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_unit_sphere() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &Sphere::unit());
        assert!(result.hit);
        assert!((result.distance.unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let sphere = Sphere::new(Point3::origin(), 5.0);
        let ray = Ray::new(Point3::new(-10.0, 10.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &sphere);
        assert!(!result.hit);
        assert!(result.distance.is_none());
    }

    #[test]
    fn test_ray_sphere_pointing_away() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let result = intersect_sphere(&ray, &Sphere::unit());
        assert!(!result.hit);
    }

    #[test]
    fn test_ray_sphere_from_inside() {
        let sphere = Sphere::new(Point3::origin(), 5.0);
        // Entry point is behind the origin, so the exit is reported
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &sphere);
        assert!(result.hit);
        assert!((result.distance.unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_behind() {
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &sphere);
        assert!(!result.hit);
    }

    #[test]
    fn test_ray_sphere_unnormalized_direction() {
        // Direction length 2: hit parameter halves
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let result = intersect_sphere(&ray, &Sphere::unit());
        assert!(result.hit);
        assert!((result.distance.unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_zero_direction() {
        let ray = Ray::new(Point3::origin(), Vec3::zeros());
        let result = intersect_sphere(&ray, &Sphere::unit());
        assert!(!result.hit);
    }
}
