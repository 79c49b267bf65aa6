//! Intersect trait, hit record and outcome codes for ray-primitive tests.

use crate::Ray;

/// Result classification of an intersection test.
///
/// The numeric values are part of the contract: callers and logs refer to
/// them as codes 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Outcome {
    /// The surface absorbs the ray; a normal is reported but no reflection.
    Absorbed = 0,
    /// The ray hits and bounces.
    Reflected = 1,
    /// No intersection in front of the ray origin.
    Miss = 2,
}

impl Outcome {
    /// Classify the result of an intersection routine.
    pub fn of(hit: Option<&Hit>) -> Self {
        match hit {
            None => Outcome::Miss,
            Some(hit) if hit.reflected.is_some() => Outcome::Reflected,
            Some(_) => Outcome::Absorbed,
        }
    }

    /// Integer outcome code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub distance: f32,
    /// Ray anchored at the hit point, pointing along the surface normal used for shading
    pub normal: Ray,
    /// Bounced ray leaving the hit point, `None` if the surface absorbs it
    pub reflected: Option<Ray>,
}

impl Hit {
    pub fn outcome(&self) -> Outcome {
        Outcome::of(Some(self))
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Intersect: Send + Sync {
    /// Test if a ray hits this primitive.
    ///
    /// Returns `None` on a miss. The ray direction is expected to be normalized
    /// so that the reported distance is in world units.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    fn hit_with(reflected: Option<Ray>) -> Hit {
        Hit {
            distance: 1.0,
            normal: Ray::new(Vec3::ZERO, Vec3::Y),
            reflected,
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Absorbed.code(), 0);
        assert_eq!(Outcome::Reflected.code(), 1);
        assert_eq!(Outcome::Miss.code(), 2);
    }

    #[test]
    fn test_outcome_of() {
        assert_eq!(Outcome::of(None), Outcome::Miss);

        let bounce = hit_with(Some(Ray::new(Vec3::ZERO, Vec3::X)));
        assert_eq!(Outcome::of(Some(&bounce)), Outcome::Reflected);
        assert_eq!(bounce.outcome(), Outcome::Reflected);

        let absorbed = hit_with(None);
        assert_eq!(absorbed.outcome(), Outcome::Absorbed);
    }
}
