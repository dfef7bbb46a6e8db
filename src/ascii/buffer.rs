//! Decoded RGBA pixel data.

use super::error::QuantizeError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// An immutable RGBA8 image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// Zero dimensions are accepted here (with empty data) so the quantizer
    /// can report them as an invalid image; a data length that does not
    /// match `width * height * 4` is rejected immediately.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, QuantizeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| QuantizeError::image(format!("{}x{} is too large", width, height)))?;

        if data.len() != expected {
            return Err(QuantizeError::image(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Caller guarantees `data.len() == width * height * 4`.
    pub(super) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a buffer from a list of RGBA pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<Self, QuantizeError> {
        let data = pixels.iter().flatten().copied().collect();
        Self::from_rgba(width, height, data)
    }

    /// A buffer filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA at `(x, y)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Raw row-major RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}
