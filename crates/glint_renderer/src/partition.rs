//! Row-range partitioning for parallel rendering.
//!
//! Splits the image height into equal, contiguous row ranges, one per
//! worker. The ranges cover `[0, height)` exactly with no gaps or overlap,
//! so workers can write their own slice of the output without locking.

use crate::{RenderError, RenderResult};
use std::ops::Range;

/// A contiguous band of image rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row (inclusive)
    pub start: u32,
    /// Last row (exclusive)
    pub end: u32,
    /// Rank of the worker that owns this band
    pub index: usize,
}

impl RowRange {
    /// Create a new row range.
    pub fn new(start: u32, end: u32, index: usize) -> Self {
        Self { start, end, index }
    }

    /// Number of rows in this band.
    pub fn row_count(&self) -> u32 {
        self.end - self.start
    }

    /// Number of pixels in this band for an image `width` pixels wide.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.row_count() as usize * width as usize
    }

    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// Split `height` rows evenly across `workers`.
///
/// Fails before any work is scheduled when there are no workers or the
/// height does not divide evenly.
pub fn partition_rows(height: u32, workers: usize) -> RenderResult<Vec<RowRange>> {
    if workers == 0 {
        return Err(RenderError::NoWorkers);
    }
    if height as usize % workers != 0 {
        return Err(RenderError::UnevenPartition { height, workers });
    }

    let band = height / workers as u32;
    Ok((0..workers)
        .map(|index| {
            let start = index as u32 * band;
            RowRange::new(start, start + band, index)
        })
        .collect())
}
