//! Raster decoding: encoded image bytes to [`PixelBuffer`].

use std::path::{Path, PathBuf};

use crate::ascii::{PixelBuffer, QuantizeError};

/// Errors that can occur while decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to read image '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Decoded image is unusable: {0}")]
    Buffer(#[from] QuantizeError),
}

/// Decode PNG, JPEG, GIF, BMP or WebP bytes into RGBA.
///
/// The format is sniffed from the content, not from a file name.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {}x{} image ({} bytes)", width, height, bytes.len());
    Ok(PixelBuffer::from_rgba(width, height, rgba.into_raw())?)
}

/// Read and decode an image file.
pub fn open(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png_keeps_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, Rgba([40, 50, 60, 0]));

        let buf = decode(&png_bytes(&img)).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(buf.pixel(1, 0)[3], 0);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = open(Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, DecodeError::Read { .. }));
    }
}
