use anyhow::{Context, Result};
use glint_core::build_scene;
use glint_renderer::{bgr_bytes, render_image, write_bitmap, RenderConfig, RenderMode};
use std::time::Instant;

/// Worker count for distributed builds. 1080 rows split into bands of 135.
const DISTRIBUTED_WORKERS: usize = 8;

/// Execution mode, fixed at build time by cargo features.
fn render_mode() -> RenderMode {
    if cfg!(feature = "distributed") {
        RenderMode::Distributed {
            workers: DISTRIBUTED_WORKERS,
        }
    } else if cfg!(feature = "parallel") {
        RenderMode::Parallel
    } else {
        RenderMode::Sequential
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting glint");

    let config = RenderConfig::default();
    config.validate().context("Invalid render configuration")?;

    let eye = config.camera().eye();
    log::info!(
        "Eye position is calculated at {}:{}:{} for image of size {}:{}",
        eye.x,
        eye.y,
        eye.z,
        config.width,
        config.height
    );

    let scene = build_scene();
    let mode = render_mode();

    let begin = Instant::now();
    let pixels = render_image(&scene, &config, mode).context("Render failed")?;
    log::info!("Rendered in {:.4} seconds", begin.elapsed().as_secs_f64());

    log::info!("Generating final output image...");
    let save_start = Instant::now();
    write_bitmap(
        &config.output,
        bgr_bytes(&pixels),
        config.width,
        config.height,
    )
    .with_context(|| format!("Failed to write {}", config.output.display()))?;
    log::info!(
        "Image generation took {:.4} seconds",
        save_start.elapsed().as_secs_f64()
    );

    log::info!(
        "Total processing time: {:.4} seconds",
        begin.elapsed().as_secs_f64()
    );

    Ok(())
}
