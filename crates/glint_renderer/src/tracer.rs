//! Reflection ray tracer.
//!
//! Follows one eye ray through the scene: find the nearest primitive, add
//! its direct lighting scaled by the energy the path still carries, bounce,
//! repeat. Paths stop when they leave the scene or run out of bounces.

use crate::{
    compute_direct_lighting,
    hittable::{Hit, Intersect},
    Color, Ray,
};
use glint_core::Scene;
use glint_math::Vec3;

/// How many times a ray is allowed to reflect.
pub const MAX_RAY_REFLECTIONS: u32 = 20;

/// Fraction of energy a path keeps after each bounce.
pub const REFLECTIVITY: f32 = 0.9;

/// Hits at or beyond this distance are ignored.
pub const MAX_HIT_DISTANCE: f32 = 1_000_000.0;

/// Which primitive of the scene a ray hit, by index into its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Circle(usize),
    Plane(usize),
}

/// The closest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    pub primitive: Primitive,
    pub hit: Hit,
}

/// Outcome of tracing a full path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// Accumulated color, unclamped
    pub color: Color,
    /// Number of intersection searches performed
    pub iterations: u32,
    /// Energy left in the path when tracing stopped
    pub reflectance: f32,
}

/// Find the nearest primitive hit by `ray`.
///
/// Circles are scanned before planes; on equal distance the earlier
/// primitive wins. Hits behind the ray origin are skipped.
pub fn nearest_hit(scene: &Scene, ray: &Ray) -> Option<NearestHit> {
    let circles = scene
        .circles()
        .iter()
        .enumerate()
        .map(|(i, c)| (Primitive::Circle(i), c as &dyn Intersect));
    let planes = scene
        .planes()
        .iter()
        .enumerate()
        .map(|(i, p)| (Primitive::Plane(i), p as &dyn Intersect));

    let mut nearest: Option<NearestHit> = None;
    let mut closest_so_far = MAX_HIT_DISTANCE;

    for (primitive, object) in circles.chain(planes) {
        if let Some(hit) = object.intersect(ray) {
            if hit.distance >= 0.0 && hit.distance < closest_so_far {
                closest_so_far = hit.distance;
                nearest = Some(NearestHit { primitive, hit });
            }
        }
    }

    nearest
}

/// Trace a path starting with `ray` (direction normalized).
///
/// When `debug` is set every step is logged at debug level.
pub fn trace_path(scene: &Scene, ray: Ray, debug: bool) -> TraceResult {
    let mut current = ray;
    let mut color = Color::ZERO;
    let mut reflectance = 1.0;
    let mut iterations = 0;

    while iterations < MAX_RAY_REFLECTIONS {
        iterations += 1;

        let nearest = nearest_hit(scene, &current);
        if let Some(nearest) = &nearest {
            let contribution = compute_direct_lighting(scene, &nearest.hit.normal, reflectance);
            color += contribution;

            if debug {
                log::debug!(
                    "bounce {}: hit {:?} at t={:.2}, point {}, normal {}, reflectance {:.3}, color {}",
                    iterations,
                    nearest.primitive,
                    nearest.hit.distance,
                    nearest.hit.normal.origin,
                    nearest.hit.normal.direction,
                    reflectance,
                    contribution
                );
            }
        } else if debug {
            log::debug!("bounce {}: ray leaves the scene", iterations);
        }

        reflectance *= REFLECTIVITY;

        match nearest.and_then(|n| n.hit.reflected) {
            Some(reflected) => current = reflected,
            None => break,
        }
    }

    if debug {
        log::debug!(
            "path finished after {} iterations, color {}",
            iterations,
            color
        );
    }

    TraceResult {
        color,
        iterations,
        reflectance,
    }
}

/// Trace the primary ray from `eye` through the image-plane point `pixel`.
pub fn trace_primary_ray(scene: &Scene, eye: Vec3, pixel: Vec3, debug: bool) -> Color {
    let ray = Ray::towards(eye, pixel);
    if debug {
        log::debug!("primary ray from {} towards {}: {}", eye, pixel, ray.direction);
    }
    trace_path(scene, ray, debug).color
}
