//! Trace a single pixel of the reference scene with step-by-step logging.
//!
//! Usage: cargo run --example trace_pixel -- [x] [y]
//! Defaults to the pixel the renderer debugs, (200, 200).

use glint_core::build_scene;
use glint_renderer::{nearest_hit, trace_path, Outcome, RenderConfig};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = RenderConfig::default();
    let (default_x, default_y) = config.debug_pixel.unwrap_or((0, 0));

    let mut args = std::env::args().skip(1);
    let x = args.next().and_then(|a| a.parse().ok()).unwrap_or(default_x);
    let y = args.next().and_then(|a| a.parse().ok()).unwrap_or(default_y);

    let scene = build_scene();
    let camera = config.camera();
    let ray = camera.get_ray(x, y);

    println!("glint - single pixel trace");
    println!("==========================");
    println!("Eye: {}", camera.eye());
    println!("Pixel ({}, {}) direction: {}", x, y, ray.direction);

    let first = nearest_hit(&scene, &ray);
    match &first {
        Some(nearest) => println!(
            "First hit: {:?} at t={:.2} (outcome {})",
            nearest.primitive,
            nearest.hit.distance,
            nearest.hit.outcome().code()
        ),
        None => println!("First hit: none (outcome {})", Outcome::Miss.code()),
    }

    let result = trace_path(&scene, ray, true);
    println!(
        "Color {} after {} iterations, reflectance left {:.4}",
        result.color, result.iterations, result.reflectance
    );
}
