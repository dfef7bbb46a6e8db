//! Image to character-grid quantization.

use super::buffer::PixelBuffer;
use super::charset::CharSet;
use super::dimensions::target_height;
use super::error::QuantizeError;
use super::grayscale::luma;
use super::mapping::{apply_tone, select_char};
use super::resample::resample;

/// Default number of output columns.
pub const DEFAULT_WIDTH: u32 = 80;

/// Default contrast multiplier.
pub const DEFAULT_CONTRAST: f64 = 1.2;

/// Rendering parameters for [`quantize`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Number of character columns. Must be positive.
    pub width: u32,
    /// Contrast multiplier around mid-gray. Finite and `>= 0`.
    pub contrast: f64,
    /// Offset added after contrast, usually a whole number in `-100..=100`.
    pub brightness: f64,
    /// Flip the luminance-to-character direction.
    pub inverted: bool,
    /// Glyphs ordered from most ink to least ink. At least two.
    pub ramp: Vec<char>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            contrast: DEFAULT_CONTRAST,
            brightness: 0.0,
            inverted: false,
            ramp: CharSet::default().chars().to_vec(),
        }
    }
}

impl RenderOptions {
    /// Use one of the preset ramps.
    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.ramp = charset.chars().to_vec();
        self
    }

    /// Use a custom ramp, dark glyphs first.
    pub fn with_ramp(mut self, ramp: &str) -> Self {
        self.ramp = ramp.chars().collect();
        self
    }

    /// The preset this ramp corresponds to, if any.
    pub fn charset(&self) -> Option<CharSet> {
        CharSet::from_ramp(&self.ramp)
    }

    /// Check every option is inside its domain.
    pub fn validate(&self) -> Result<(), QuantizeError> {
        if self.width == 0 {
            return Err(QuantizeError::config("width must be at least 1 column"));
        }
        if self.ramp.len() < 2 {
            return Err(QuantizeError::config(format!(
                "character ramp needs at least 2 characters, got {}",
                self.ramp.len()
            )));
        }
        if !self.contrast.is_finite() {
            return Err(QuantizeError::config(format!(
                "contrast must be finite, got {}",
                self.contrast
            )));
        }
        if self.contrast < 0.0 {
            return Err(QuantizeError::config(format!(
                "contrast must not be negative, got {}",
                self.contrast
            )));
        }
        if !self.brightness.is_finite() {
            return Err(QuantizeError::config(format!(
                "brightness must be finite, got {}",
                self.brightness
            )));
        }
        Ok(())
    }
}

/// A finished block of characters, `width` columns by `height` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharacterGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Characters of row `index`. Panics when out of range.
    pub fn row(&self, index: usize) -> &[char] {
        let start = index * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Serialize as text: each row, the last one included, ends in one `'\n'`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Convert an image into a character grid.
///
/// Pure and deterministic: no I/O, no shared state, safe to call from any
/// number of threads at once. Configuration is checked before the image, and
/// nothing is produced on failure.
///
/// Per cell of the resampled image:
/// 1. alpha exactly 0 gives a space
/// 2. luma, contrast, brightness, clamp ([`apply_tone`])
/// 3. optional inversion `255 - gray`
/// 4. glyph lookup ([`select_char`])
///
/// # Example
/// ```
/// use banner_gen::ascii::{quantize, PixelBuffer, RenderOptions};
/// let image = PixelBuffer::filled(10, 10, [255, 255, 255, 255]);
/// let options = RenderOptions { width: 4, contrast: 1.0, ..Default::default() };
/// let grid = quantize(&image, &options).unwrap();
/// assert_eq!(grid.to_text(), "@@@@\n@@@@\n");
/// ```
pub fn quantize(image: &PixelBuffer, options: &RenderOptions) -> Result<CharacterGrid, QuantizeError> {
    options.validate()?;

    if image.is_empty() {
        return Err(QuantizeError::image(format!(
            "source has zero dimension ({}x{})",
            image.width(),
            image.height()
        )));
    }

    let width = options.width as usize;
    let height = target_height(image.width(), image.height(), options.width);
    let rows = u32::try_from(height).map_err(|_| {
        QuantizeError::config(format!("{} rows exceed the supported grid size", height))
    })?;

    log::debug!(
        "Quantizing {}x{} image to {}x{} grid ({} levels)",
        image.width(),
        image.height(),
        width,
        height,
        options.ramp.len()
    );

    let small = resample(image, options.width, rows);
    let mut cells = Vec::with_capacity(width * height);

    for y in 0..rows {
        for x in 0..options.width {
            let [r, g, b, a] = small.pixel(x, y);
            if a == 0 {
                cells.push(' ');
                continue;
            }

            let mut gray = apply_tone(luma(r, g, b), options.contrast, options.brightness);
            if options.inverted {
                gray = 255.0 - gray;
            }
            cells.push(select_char(&options.ramp, gray));
        }
    }

    Ok(CharacterGrid {
        width,
        height,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(width: u32, ramp: &str) -> RenderOptions {
        RenderOptions {
            width,
            contrast: 1.0,
            brightness: 0.0,
            inverted: false,
            ramp: ramp.chars().collect(),
        }
    }

    #[test]
    fn test_default_options_are_valid() {
        let opts = RenderOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.width, 80);
        assert_eq!(opts.contrast, 1.2);
        assert_eq!(opts.charset(), Some(CharSet::Standard));
    }

    #[test]
    fn test_config_checked_before_image() {
        let empty = PixelBuffer::from_rgba(0, 0, Vec::new()).unwrap();
        let err = quantize(&empty, &plain(0, "#. ")).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_negative_contrast_rejected() {
        let mut opts = plain(4, "#. ");
        opts.contrast = -1.0;
        assert!(opts.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_infinite_brightness_rejected() {
        let mut opts = plain(4, "#. ");
        opts.brightness = f64::INFINITY;
        assert!(opts.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_transparent_cell_is_space_even_inverted() {
        let image = PixelBuffer::filled(4, 4, [255, 255, 255, 0]);
        let mut opts = plain(4, "#@");
        opts.inverted = true;
        let grid = quantize(&image, &opts).unwrap();
        assert!(grid.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_rows_iterator_matches_row() {
        let image = PixelBuffer::filled(10, 10, [0, 0, 0, 255]);
        let grid = quantize(&image, &plain(6, "#. ")).unwrap();
        assert_eq!(grid.rows().count(), grid.height());
        for (i, row) in grid.rows().enumerate() {
            assert_eq!(row, grid.row(i));
        }
    }

    #[test]
    fn test_display_matches_to_text() {
        let image = PixelBuffer::filled(10, 10, [0, 0, 0, 255]);
        let grid = quantize(&image, &plain(3, "#. ")).unwrap();
        assert_eq!(format!("{}", grid), grid.to_text());
    }
}
