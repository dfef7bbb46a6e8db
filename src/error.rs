//! Crate-level error type.

use crate::ascii::QuantizeError;
use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::figlet::FontError;

/// Any failure surfaced to the command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Quantize(#[from] QuantizeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}
