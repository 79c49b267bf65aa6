//! Sphere intersection for ray tracing.

use crate::{
    hittable::{Hit, Intersect},
    Ray,
};
use glint_core::SceneCircle;
use glint_math::reflect;

impl Intersect for SceneCircle {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // |O + tD - C|^2 = r^2 as a quadratic in t
        let oc = ray.origin - self.origin;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let root = ((-b - sqrtd) / (2.0 * a)).min((-b + sqrtd) / (2.0 * a));

        // Sphere is behind the ray origin
        if root < 0.0 {
            return None;
        }

        let p = ray.at(root);
        let normal = (p - self.origin).normalize();
        let bounce = reflect(ray.direction, -normal).normalize();

        Some(Hit {
            distance: root,
            normal: Ray::new(p, normal),
            reflected: Some(Ray::new(p, bounce)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Vec3};
    use glint_math::approx_eq;

    #[test]
    fn test_sphere_hit_distance() {
        let sphere = SceneCircle::new(Vec3::new(0.0, 0.0, 10.0), 3.0);
        let origins = [
            Vec3::ZERO,
            Vec3::new(4.0, -2.0, 1.0),
            Vec3::new(-5.0, 7.0, 20.0),
        ];

        for origin in origins {
            let ray = Ray::towards(origin, sphere.origin);
            let hit = sphere.intersect(&ray).expect("ray aimed at center must hit");

            let expected = (sphere.origin - origin).length() - sphere.radius;
            assert!(
                (hit.distance - expected).abs() < 1e-3,
                "distance {} != {}",
                hit.distance,
                expected
            );
            assert_eq!(hit.outcome(), Outcome::Reflected);
        }
    }

    #[test]
    fn test_sphere_hit_rays() {
        let sphere = SceneCircle::new(Vec3::new(0.0, 0.0, 10.0), 3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).unwrap();
        let reflected = hit.reflected.unwrap();

        // Head-on hit: normal faces the origin and the ray bounces straight back
        assert!(approx_eq(hit.normal.origin, Vec3::new(0.0, 0.0, 7.0), 1e-5));
        assert!(approx_eq(hit.normal.direction, -Vec3::Z, 1e-5));
        assert_eq!(reflected.origin, hit.normal.origin);
        assert!(approx_eq(reflected.direction, -Vec3::Z, 1e-5));
    }

    #[test]
    fn test_sphere_reflection_is_unit() {
        let sphere = SceneCircle::new(Vec3::new(1.0, 0.5, 10.0), 3.0);
        let ray = Ray::towards(Vec3::ZERO, Vec3::new(2.0, 1.0, 10.0));

        let hit = sphere.intersect(&ray).unwrap();
        let reflected = hit.reflected.unwrap();
        assert!((reflected.direction.length() - 1.0).abs() < 1e-5);
        assert!((hit.normal.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = SceneCircle::new(Vec3::new(0.0, 0.0, 10.0), 3.0);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let hit = sphere.intersect(&ray);

        assert!(hit.is_none());
        assert_eq!(Outcome::of(hit.as_ref()).code(), 2);
    }

    #[test]
    fn test_sphere_behind_origin_is_miss() {
        let sphere = SceneCircle::new(Vec3::new(0.0, 0.0, -10.0), 3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_reflected_ray_leaves_sphere() {
        // Bounced ray must not hit the same sphere again
        let sphere = SceneCircle::new(Vec3::new(0.0, 0.0, 10.0), 3.0);
        let ray = Ray::towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 10.0));

        let reflected = sphere.intersect(&ray).unwrap().reflected.unwrap();
        assert!(sphere.intersect(&reflected).is_none());
    }
}
