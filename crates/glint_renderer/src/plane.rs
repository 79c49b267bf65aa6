//! Plane intersection for ray tracing.

use crate::{
    hittable::{Hit, Intersect},
    Ray,
};
use glint_core::ScenePlane;
use glint_math::reflect;

/// Below this value of `N·D` a plane counts as missed.
///
/// One threshold rejects parallel rays, back-facing rays and grazing
/// front-facing rays alike.
pub const PLANE_EPSILON: f32 = 1e-4;

impl Intersect for ScenePlane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denominator = self.normal.dot(ray.direction);
        if denominator < PLANE_EPSILON {
            return None;
        }

        // May be negative when the plane lies behind the origin; the tracer
        // only accepts non-negative distances.
        let t = (self.origin - ray.origin).dot(self.normal) / denominator;
        let p = ray.at(t);

        let flipped = -self.normal;
        let bounce = reflect(ray.direction, flipped).normalize();

        Some(Hit {
            distance: t,
            normal: Ray::new(p, flipped),
            reflected: Some(Ray::new(p, bounce)),
        })
    }
}
