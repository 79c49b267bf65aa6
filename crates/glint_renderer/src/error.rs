//! Errors raised outside the numeric core: configuration, workers and output.

use thiserror::Error;

/// Errors that can occur while setting up or finishing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("Distributed render needs at least one worker")]
    NoWorkers,

    #[error("Image height {height} is not divisible by worker count {workers}")]
    UnevenPartition { height: u32, workers: usize },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Render worker {0} failed")]
    WorkerFailed(usize),

    #[error("Render workers disconnected before the run finished")]
    Disconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
