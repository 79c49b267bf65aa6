//! glint core - scene data for the reflection raytracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `SceneCircle`, `ScenePlane`, `SceneLight`, `Scene`
//! - **Reference scene**: `build_scene`, the compiled-in configuration
//!
//! # Example
//!
//! ```
//! use glint_core::build_scene;
//!
//! let scene = build_scene();
//! assert_eq!(scene.circles().len(), glint_core::NUM_CIRCLES);
//! ```

pub mod scene;

// Re-export commonly used types
pub use scene::{
    build_scene, Scene, SceneCircle, SceneLight, ScenePlane, NUM_CIRCLES, NUM_LIGHTS, NUM_PLANES,
};
