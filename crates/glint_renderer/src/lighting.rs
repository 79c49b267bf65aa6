//! Direct illumination from the scene's point lights.

use crate::Ray;
use glint_core::Scene;
use glint_math::Vec3;
use std::f32::consts::PI;

/// Color type alias (RGB weights, unbounded until tone mapping)
pub type Color = Vec3;

/// Diffuse reflectivity shared by every surface.
pub const ALBEDO: f32 = 0.2;

/// Sum the Lambertian response of every light at a hit point.
///
/// `normal` is anchored at the hit point and points along the shading
/// normal. Each light falls off with the inverse square law and the result
/// is scaled by `reflectance`, the energy the path still carries. No shadow
/// rays are cast: every light reaches every point.
pub fn compute_direct_lighting(scene: &Scene, normal: &Ray, reflectance: f32) -> Color {
    let mut color = Color::ZERO;

    for light in scene.lights() {
        let to_light = light.position - normal.origin;
        let distance = to_light.length();
        let direction = to_light / distance;

        let falloff = light.intensity / (4.0 * PI * distance * distance);
        let diffuse = direction.dot(normal.direction).max(0.0);

        color += light.color * falloff * (ALBEDO / PI) * reflectance * diffuse;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{build_scene, SceneLight};

    fn single_light(position: Vec3, intensity: f32, color: Vec3) -> Scene {
        Scene::new(
            Vec::new(),
            Vec::new(),
            vec![SceneLight::new(position, intensity, color)],
        )
    }

    #[test]
    fn test_light_straight_above() {
        let scene = single_light(Vec3::new(0.0, 10.0, 0.0), 1000.0, Vec3::ONE);
        let normal = Ray::new(Vec3::ZERO, Vec3::Y);

        let color = compute_direct_lighting(&scene, &normal, 1.0);

        let expected = 1000.0 / (4.0 * PI * 100.0) * (ALBEDO / PI);
        assert!((color.x - expected).abs() < 1e-6);
        assert_eq!(color.x, color.y);
        assert_eq!(color.y, color.z);
    }

    #[test]
    fn test_inverse_square_falloff() {
        let near = single_light(Vec3::new(0.0, 10.0, 0.0), 1000.0, Vec3::ONE);
        let far = single_light(Vec3::new(0.0, 20.0, 0.0), 1000.0, Vec3::ONE);
        let normal = Ray::new(Vec3::ZERO, Vec3::Y);

        let near_color = compute_direct_lighting(&near, &normal, 1.0);
        let far_color = compute_direct_lighting(&far, &normal, 1.0);

        assert!((near_color.x / far_color.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let scene = single_light(Vec3::new(0.0, -10.0, 0.0), 1000.0, Vec3::ONE);
        let normal = Ray::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(compute_direct_lighting(&scene, &normal, 1.0), Color::ZERO);
    }

    #[test]
    fn test_reflectance_scales_linearly() {
        let scene = build_scene();
        let normal = Ray::new(Vec3::new(1000.0, 500.0, 300.0), -Vec3::Z);

        let full = compute_direct_lighting(&scene, &normal, 1.0);
        let decayed = compute_direct_lighting(&scene, &normal, 0.9);

        assert!(full.length() > 0.0);
        assert!((decayed - full * 0.9).length() < 1e-4 * full.length());
    }

    #[test]
    fn test_light_color_weights_channels() {
        let scene = single_light(Vec3::new(0.0, 10.0, 0.0), 1000.0, Vec3::new(2.0, 1.0, 0.0));
        let normal = Ray::new(Vec3::ZERO, Vec3::Y);

        let color = compute_direct_lighting(&scene, &normal, 1.0);
        assert!((color.x - 2.0 * color.y).abs() < 1e-6);
        assert_eq!(color.z, 0.0);
    }
}
