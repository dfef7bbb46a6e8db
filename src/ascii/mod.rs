//! Image quantizer: raster image in, block of characters out.
//!
//! The pipeline for one conversion:
//!
//! 1. **Resampling** - box-filter the RGBA image down (or up) to the grid size
//! 2. **Grayscale conversion** - luma using BT.601 weights
//! 3. **Tone** - contrast around mid-gray, brightness offset, clamp
//! 4. **Character mapping** - bucket luminance into a ramp of glyphs
//!
//! Grid height follows from the requested width, the image aspect ratio and
//! [`FONT_ASPECT_RATIO`].
//!
//! # Character Sets
//!
//! Presets are available via [`CharSet`]:
//! - `Standard` - 10-level ASCII density ramp
//! - `Simple` - `#`, `.` and space
//! - `Blocks` - Unicode shade blocks
//! - `Complex` - 70-level ASCII ramp

mod buffer;
mod charset;
mod dimensions;
mod error;
mod grayscale;
mod mapping;
mod quantize;
mod resample;

pub use buffer::PixelBuffer;
pub use charset::{CharSet, BLOCKS_CHARSET, COMPLEX_CHARSET, SIMPLE_CHARSET, STANDARD_CHARSET};
pub use dimensions::{target_height, FONT_ASPECT_RATIO};
pub use error::QuantizeError;
pub use grayscale::luma;
pub use mapping::{apply_tone, ramp_index, select_char, CONTRAST_PIVOT};
pub use quantize::{quantize, CharacterGrid, RenderOptions, DEFAULT_CONTRAST, DEFAULT_WIDTH};
pub use resample::resample;
