//! RGB to grayscale conversion using the ITU-R BT.601 luma weights.

/// Luma of an RGB triple: `0.299*R + 0.587*G + 0.114*B`.
///
/// Kept as a real number; rounding only happens when the value is turned
/// into a ramp index.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}
