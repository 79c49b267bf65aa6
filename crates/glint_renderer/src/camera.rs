//! Camera for primary ray generation.
//!
//! The image plane is `z = 0` with pixel `(x, y)` at world position
//! `(x, y, 0)`. The eye sits on the plane's perpendicular bisector, behind
//! the screen, at a depth set by the horizontal field of view.

use crate::Ray;
use glint_math::Vec3;

/// Compute the eye position for an image of `width` x `height` pixels.
///
/// The eye is centered on the image and pulled back to
/// `z = -(width / 2) / tan(fov / 2)`, so a wider field of view brings it
/// closer to the screen. `fov_degrees` must lie in (0, 180).
pub fn compute_eye_position(width: u32, height: u32, fov_degrees: f32) -> Vec3 {
    let half_width = width as f32 / 2.0;
    let half_fov = fov_degrees.to_radians() / 2.0;
    let depth = half_width / half_fov.tan();

    Vec3::new(half_width, height as f32 / 2.0, -depth)
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
}

impl Camera {
    /// Create a camera for the given resolution and field of view in degrees.
    pub fn new(image_width: u32, image_height: u32, fov_degrees: f32) -> Self {
        Self {
            image_width,
            image_height,
            eye: compute_eye_position(image_width, image_height, fov_degrees),
        }
    }

    /// Get the eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// World position of pixel (x, y) on the image plane.
    #[inline]
    pub fn pixel_position(&self, x: u32, y: u32) -> Vec3 {
        Vec3::new(x as f32, y as f32, 0.0)
    }

    /// Generate the normalized primary ray through pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        Ray::towards(self.eye, self.pixel_position(x, y))
    }
}
