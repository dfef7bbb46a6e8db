//! Big-letter text banners from FIGlet fonts.
//!
//! Fonts are plain `.flf` files read from a local directory and cached in a
//! [`FontRegistry`]. Fetching fonts over the network is left to the user.

mod font;
mod registry;
mod render;

use std::path::PathBuf;

pub use font::{FigFont, Glyph, Layout, DEUTSCH_CODES, SIGNATURE};
pub use registry::{FontRegistry, FONT_EXTENSION};
pub use render::{render, DEFAULT_MAX_WIDTH};

/// Name of the font used when none is configured.
pub const DEFAULT_FONT: &str = "Standard";

/// Errors that can occur while loading or parsing a font.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font '{name}' not found in {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("Invalid font name '{name}'")]
    InvalidName { name: String },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Font '{name}' is malformed at line {line}: {reason}")]
    Parse {
        name: String,
        line: usize,
        reason: String,
    },
}
