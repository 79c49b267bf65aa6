//! glint renderer - CPU reflection raytracing
//!
//! Casts one ray per pixel from a pinhole eye, follows mirror reflections
//! through a fixed scene of spheres and planes, and sums diffuse lighting
//! from point lights at every bounce.

mod camera;
pub mod distributed;
mod error;
mod hittable;
mod lighting;
mod output;
pub mod partition;
mod plane;
mod renderer;
mod sphere;
pub mod tonemap;
mod tracer;

pub use camera::{compute_eye_position, Camera};
pub use distributed::render_distributed;
pub use error::{RenderError, RenderResult};
pub use hittable::{Hit, Intersect, Outcome};
pub use lighting::{compute_direct_lighting, Color, ALBEDO};
pub use output::write_bitmap;
pub use partition::{partition_rows, RowRange};
pub use plane::PLANE_EPSILON;
pub use renderer::{
    render, render_image, render_parallel, render_pixel, render_row, ImageBuffer, RenderConfig,
    RenderMode,
};
pub use tonemap::{bgr_bytes, max_channel, tone_map, Bgr};
pub use tracer::{
    nearest_hit, trace_path, trace_primary_ray, NearestHit, Primitive, TraceResult,
    MAX_HIT_DISTANCE, MAX_RAY_REFLECTIONS, REFLECTIVITY,
};

/// Re-export Vec3 and the ray type from glint_math
pub use glint_math::{Ray, Vec3};
