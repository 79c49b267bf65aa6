//! Vector helpers that glam does not provide in the form the tracer needs.

use crate::Vec3;

/// Reflect `direction` about `normal`.
///
/// Returns `d - 2 * dot(d, n) * n`. `normal` is expected to be unit length;
/// the result is not normalized.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Component-wise comparison within `epsilon`.
#[inline]
pub fn approx_eq(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    (a - b).abs().max_element() <= epsilon
}
