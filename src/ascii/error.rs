//! Error types for the quantizer.

/// Errors raised before any output is produced.
///
/// Luminance values are clamped as part of the algorithm; an out-of-domain
/// configuration is never clamped and always ends up here instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantizeError {
    /// Malformed or zero-dimension source image.
    #[error("invalid image: {reason}")]
    InvalidImage {
        /// What is wrong with the image
        reason: String,
    },

    /// Out-of-domain render configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which option was rejected and why
        reason: String,
    },
}

impl QuantizeError {
    pub(crate) fn image(reason: impl Into<String>) -> Self {
        QuantizeError::InvalidImage {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        QuantizeError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for [`QuantizeError::InvalidConfig`].
    pub fn is_config(&self) -> bool {
        matches!(self, QuantizeError::InvalidConfig { .. })
    }

    /// True for [`QuantizeError::InvalidImage`].
    pub fn is_image(&self) -> bool {
        matches!(self, QuantizeError::InvalidImage { .. })
    }
}
