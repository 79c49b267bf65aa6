//! Scene types for glint.
//!
//! The scene is plain data: spheres, planes and point lights. It is built
//! once, never mutated, and shared read-only by every render worker.

use glint_math::Vec3;

/// Number of spheres in the reference scene.
pub const NUM_CIRCLES: usize = 4;

/// Number of planes in the reference scene.
pub const NUM_PLANES: usize = 5;

/// Number of point lights in the reference scene.
pub const NUM_LIGHTS: usize = 3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCircle {
    /// Center of the sphere
    pub origin: Vec3,
    pub radius: f32,
}

impl SceneCircle {
    pub fn new(origin: Vec3, radius: f32) -> Self {
        Self { origin, radius }
    }
}

/// An infinite plane through `origin`.
///
/// `normal` is unit length. Rays only hit the plane when they travel along
/// the normal, so it points away from the side the plane is visible from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePlane {
    pub origin: Vec3,
    pub normal: Vec3,
}

impl ScenePlane {
    /// Create a plane, normalizing `normal`.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLight {
    pub position: Vec3,
    /// Radiant intensity, spread over a sphere by the inverse square law
    pub intensity: f32,
    /// Unnormalized RGB weight
    pub color: Vec3,
}

impl SceneLight {
    pub fn new(position: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            position,
            intensity,
            color,
        }
    }
}

/// The full set of primitives and lights queried by the tracer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    circles: Vec<SceneCircle>,
    planes: Vec<ScenePlane>,
    lights: Vec<SceneLight>,
}

impl Scene {
    /// Create a scene from explicit primitive and light lists.
    pub fn new(
        circles: Vec<SceneCircle>,
        planes: Vec<ScenePlane>,
        lights: Vec<SceneLight>,
    ) -> Self {
        Self {
            circles,
            planes,
            lights,
        }
    }

    pub fn circles(&self) -> &[SceneCircle] {
        &self.circles
    }

    pub fn planes(&self) -> &[ScenePlane] {
        &self.planes
    }

    pub fn lights(&self) -> &[SceneLight] {
        &self.lights
    }

    /// Total number of intersectable primitives.
    pub fn primitive_count(&self) -> usize {
        self.circles.len() + self.planes.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        build_scene()
    }
}

/// Build the reference scene.
///
/// The same scene comes back on every call, which keeps renders comparable
/// between execution modes.
pub fn build_scene() -> Scene {
    let lights = vec![
        SceneLight::new(
            Vec3::new(-100.0, 1300.0, -250.0),
            20000.0,
            Vec3::new(225.0, 100.0, 70.0),
        ),
        SceneLight::new(
            Vec3::new(500.0, 400.0, 0.0),
            12000.0,
            Vec3::new(102.0, 100.0, 255.0),
        ),
        SceneLight::new(
            Vec3::new(300.0, 1000.0, 500.0),
            1000.0,
            Vec3::new(20.0, 255.0, 20.0),
        ),
    ];

    let circles = vec![
        SceneCircle::new(Vec3::new(1000.0, 500.0, 600.0), 300.0),
        SceneCircle::new(Vec3::new(-400.0, 500.0, 800.0), 400.0),
        SceneCircle::new(Vec3::new(100.0, 1400.0, 600.0), 300.0),
        SceneCircle::new(Vec3::new(-200.0, 500.0, 700.0), 50.0),
    ];

    // Planes 3 and 4 are identical; both are kept so scan order and counts
    // stay stable.
    let planes = vec![
        ScenePlane::new(Vec3::new(0.0, 0.0, 950.0), Vec3::new(0.0, 0.0, 1.0)),
        ScenePlane::new(Vec3::new(0.0, 0.0, 1000.0), Vec3::new(0.0, -1.0, 1.0)),
        ScenePlane::new(Vec3::new(400.0, 1700.0, 1000.0), Vec3::new(0.0, 1.0, 1.0)),
        ScenePlane::new(Vec3::new(700.0, 0.0, 1000.0), Vec3::new(1.0, 0.0, 1.0)),
        ScenePlane::new(Vec3::new(700.0, 0.0, 1000.0), Vec3::new(1.0, 0.0, 1.0)),
    ];

    let scene = Scene::new(circles, planes, lights);
    log::trace!(
        "Built scene: {} circles, {} planes, {} lights",
        scene.circles.len(),
        scene.planes.len(),
        scene.lights.len()
    );
    scene
}
