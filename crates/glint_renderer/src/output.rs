//! Bitmap output.

use crate::{RenderError, RenderResult};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Write a flat BGR byte buffer as an uncompressed 24-bit BMP.
///
/// `bgr` holds `width * height` pixels of three bytes each in blue, green,
/// red order. Row 0 of the buffer is the bottom scanline of the picture,
/// the way bitmaps store rows.
pub fn write_bitmap(path: &Path, bgr: &[u8], width: u32, height: u32) -> RenderResult<()> {
    let expected = width as usize * height as usize * 3;
    if bgr.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: bgr.len(),
        });
    }

    let img = RgbImage::from_fn(width, height, |x, y| {
        let row = (height - 1 - y) as usize;
        let i = (row * width as usize + x as usize) * 3;
        Rgb([bgr[i + 2], bgr[i + 1], bgr[i]])
    });

    img.save_with_format(path, ImageFormat::Bmp)?;
    log::info!("Wrote {}x{} bitmap to {}", width, height, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glint_{}_{}.bmp", name, std::process::id()))
    }

    #[test]
    fn test_write_bitmap_round_trip() {
        // 2x2: bottom row red, green; top row blue, white
        let bgr: Vec<u8> = vec![
            0, 0, 255, 0, 255, 0, //
            255, 0, 0, 255, 255, 255,
        ];
        let path = temp_path("round_trip");

        write_bitmap(&path, &bgr, 2, 2).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(img.dimensions(), (2, 2));
        // Top-left in the decoded image is the last buffer row
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_write_bitmap_rejects_short_buffer() {
        let path = temp_path("short");
        let err = write_bitmap(&path, &[0; 5], 2, 2).unwrap_err();

        assert!(matches!(
            err,
            RenderError::BufferSize {
                expected: 12,
                actual: 5
            }
        ));
        assert!(!path.exists());
    }
}
