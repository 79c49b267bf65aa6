//! Linear tone mapping from raw radiance to 8-bit BGR pixels.

use crate::Color;
use bytemuck::{Pod, Zeroable};

/// An 8-bit pixel in bitmap channel order.
///
/// Laid out as three packed bytes so a `&[Bgr]` can be handed to the image
/// writer as a flat byte buffer with `bytemuck::cast_slice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Bgr {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Bgr {
    pub const BLACK: Bgr = Bgr {
        blue: 0,
        green: 0,
        red: 0,
    };
}

/// View tone-mapped pixels as the flat BGR byte buffer the bitmap writer takes.
pub fn bgr_bytes(pixels: &[Bgr]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

/// Largest channel value over all pixels, never below zero.
pub fn max_channel(pixels: &[Color]) -> f32 {
    pixels
        .iter()
        .map(|c| c.max_element())
        .fold(0.0, f32::max)
}

/// Map one color to 8 bits per channel, `channel * scale` truncated.
///
/// `scale` is `255 / max`. The float-to-int cast saturates, so values at or
/// above the maximum land on 255 and negatives on 0.
#[inline]
pub fn tone_map_pixel(color: Color, scale: f32) -> Bgr {
    let scaled = color * scale;
    Bgr {
        blue: scaled.z as u8,
        green: scaled.y as u8,
        red: scaled.x as u8,
    }
}

/// Scale factor that maps `max` to 255. An all-black image maps to zero.
#[inline]
pub fn tone_scale(max: f32) -> f32 {
    if max > 0.0 {
        255.0 / max
    } else {
        0.0
    }
}

/// Tone-map a raw buffer against a (possibly global) maximum.
pub fn tone_map(pixels: &[Color], max: f32) -> Vec<Bgr> {
    let scale = tone_scale(max);
    pixels.iter().map(|c| tone_map_pixel(*c, scale)).collect()
}
