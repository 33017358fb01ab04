//! PNG encode/decode and output-file management.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader, RgbImage};
use tracing::debug;

use volgrid_core::error::{VolGridError, VolGridResult};
use volgrid_core::render::RenderedImage;

/// Encodes an image as PNG bytes.
///
/// # Errors
///
/// Returns [`VolGridError::Render`] when encoding fails.
pub fn encode(image: &RenderedImage) -> VolGridResult<Vec<u8>> {
    let rgb = RgbImage::from_raw(image.width(), image.height(), image.pixels().to_vec())
        .ok_or_else(|| VolGridError::render("pixel buffer does not match image dimensions"))?;
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| VolGridError::render(format!("PNG encode failed: {e}")))?;
    Ok(bytes)
}

/// Decodes PNG bytes into an image.
///
/// # Errors
///
/// Returns [`VolGridError::Render`] when the bytes are not a valid PNG.
pub fn decode(bytes: &[u8]) -> VolGridResult<RenderedImage> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| VolGridError::render(format!("PNG decode failed: {e}")))?
        .to_rgb8();
    RenderedImage::from_raw(decoded.width(), decoded.height(), decoded.into_raw())
}

/// Writes an image to a PNG file.
///
/// # Errors
///
/// Returns [`VolGridError::Render`] on encoding failure or
/// [`VolGridError::Io`] on write failure.
pub fn write_png(image: &RenderedImage, path: impl AsRef<Path>) -> VolGridResult<()> {
    let path = path.as_ref();
    std::fs::write(path, encode(image)?)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote image");
    Ok(())
}

/// Reads a PNG file into an image.
///
/// # Errors
///
/// Returns [`VolGridError::Io`] when the file cannot be read or
/// [`VolGridError::Render`] when it is not a valid PNG.
pub fn read_png(path: impl AsRef<Path>) -> VolGridResult<RenderedImage> {
    let decoded = ImageReader::open(path.as_ref())?
        .decode()
        .map_err(|e| VolGridError::render(format!("PNG decode failed: {e}")))?
        .to_rgb8();
    RenderedImage::from_raw(decoded.width(), decoded.height(), decoded.into_raw())
}

/// Removes a generated file, ignoring files that are already gone.
///
/// # Errors
///
/// Returns [`VolGridError::Io`] for failures other than the file being
/// absent.
pub fn remove_file(path: impl AsRef<Path>) -> VolGridResult<()> {
    match std::fs::remove_file(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> RenderedImage {
        let mut image = RenderedImage::filled(width, height, [255, 255, 255]);
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    image.put_pixel(x, y, [30, 60, 90]);
                }
            }
        }
        image
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let original = checker(21, 13);
        let decoded = decode(&encode(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_write_read_roundtrip_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("EUR|USD.png");
        let original = checker(210, 490);

        write_png(&original, &path).unwrap();
        let loaded = read_png(&path).unwrap();
        assert_eq!(loaded.width(), 210);
        assert_eq!(loaded.height(), 490);
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode(b"not a png").is_err());
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_file(dir.path().join("absent.png")).is_ok());
    }
}
