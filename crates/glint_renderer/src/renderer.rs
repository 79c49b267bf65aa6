//! Render drivers.
//!
//! Casts one primary ray per pixel and collects the raw colors into an
//! [`ImageBuffer`], then tone-maps them against the image's maximum channel
//! value. Three execution modes share the same per-pixel code:
//! - sequential, a plain row/column loop
//! - parallel, rows spread over the rayon thread pool
//! - distributed, see [`crate::distributed`]

use crate::{
    distributed::render_distributed,
    tonemap::{max_channel, tone_map, tone_map_pixel, tone_scale, Bgr},
    trace_primary_ray, Camera, Color, RenderError, RenderResult,
};
use glint_core::Scene;
use rayon::prelude::*;
use std::path::PathBuf;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal field of view in degrees, within (0, 180)
    pub field_of_view: f32,
    /// Where the bitmap is written
    pub output: PathBuf,
    /// Pixel whose trace is logged step by step at debug level
    pub debug_pixel: Option<(u32, u32)>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            field_of_view: 30.0,
            output: PathBuf::from("rendered.bmp"),
            debug_pixel: Some((200, 200)),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        self.field_of_view = degrees;
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Select the pixel to trace verbosely, or `None` for no debug output.
    pub fn with_debug_pixel(mut self, pixel: Option<(u32, u32)>) -> Self {
        self.debug_pixel = pixel;
        self
    }

    /// Check the configuration before any rendering work starts.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(RenderError::InvalidFieldOfView(self.field_of_view));
        }
        Ok(())
    }

    /// Camera for this resolution and field of view.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.field_of_view)
    }

    #[inline]
    fn is_debug_pixel(&self, x: u32, y: u32) -> bool {
        self.debug_pixel == Some((x, y))
    }
}

/// How the pixel loop is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Sequential,
    /// Rows spread over the rayon thread pool, writing one shared buffer
    Parallel,
    /// Independent workers with private buffers and a global max reduction
    Distributed { workers: usize },
}

/// Raw, unclamped render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Largest channel value in the image.
    pub fn max_channel(&self) -> f32 {
        max_channel(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Trace the primary ray for a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32, config: &RenderConfig) -> Color {
    trace_primary_ray(
        scene,
        camera.eye(),
        camera.pixel_position(x, y),
        config.is_debug_pixel(x, y),
    )
}

/// Render one row into `row`, which holds exactly `camera.image_width` pixels.
pub fn render_row(scene: &Scene, camera: &Camera, y: u32, row: &mut [Color], config: &RenderConfig) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(scene, camera, x as u32, y, config);
    }
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(scene, camera, x, y, config);
            image.set(x, y, color);
        }
    }

    image
}

/// Render the entire scene with rows spread over the rayon thread pool.
///
/// Each task owns one row slice of the shared buffer; no locking needed.
pub fn render_parallel(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let width = camera.image_width as usize;

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(scene, camera, y as u32, row, config));

    image
}

/// Render and tone-map the scene with the selected execution mode.
///
/// Returns the 8-bit pixels in buffer order (row 0 first), ready to be
/// written with [`crate::write_bitmap`].
pub fn render_image(scene: &Scene, config: &RenderConfig, mode: RenderMode) -> RenderResult<Vec<Bgr>> {
    config.validate()?;
    let camera = config.camera();
    log::info!(
        "Rendering {}x{} at {} degrees FOV ({:?}), eye at {}",
        config.width,
        config.height,
        config.field_of_view,
        mode,
        camera.eye()
    );

    match mode {
        RenderMode::Sequential => {
            let image = render(scene, &camera, config);
            let max = image.max_channel();
            log::info!("Maximum lighting value: {:.2}", max);
            Ok(tone_map(&image.pixels, max))
        }
        RenderMode::Parallel => {
            let image = render_parallel(scene, &camera, config);
            let max = image
                .pixels
                .par_iter()
                .map(|c| c.max_element())
                .reduce(|| 0.0, f32::max);
            log::info!("Maximum lighting value: {:.2}", max);

            let scale = tone_scale(max);
            Ok(image
                .pixels
                .par_iter()
                .map(|c| tone_map_pixel(*c, scale))
                .collect())
        }
        RenderMode::Distributed { workers } => render_distributed(scene, config, workers),
    }
}
