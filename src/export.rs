//! PNG export.
//!
//! Both output paths of the system (download and upload) use PNG, so the
//! encoder lives here: in-memory encoding for HTTP responses and a
//! save-to-file helper for the CLI.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::MemeError;

/// Encode a rendered bitmap to PNG bytes in memory.
pub fn encode_png(bitmap: &RgbaImage) -> Result<Vec<u8>, MemeError> {
    let mut buffer = Cursor::new(Vec::new());
    bitmap
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| MemeError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(buffer.into_inner())
}

/// Encode and write a rendered bitmap to `path`.
pub fn save_png(bitmap: &RgbaImage, path: &Path) -> Result<(), MemeError> {
    bitmap
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| MemeError::Image(format!("Failed to save {}: {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn encoded_png_round_trips() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 2, Rgba([250, 0, 0, 255]));

        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }
}
