//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Width of a monospace character cell relative to its height.
///
/// A cell is roughly 0.55 as wide as it is tall, so the grid needs fewer rows
/// than a pixel-for-pixel mapping would give.
pub const FONT_ASPECT_RATIO: f64 = 0.55;

/// Number of character rows for a given column count.
///
/// `floor(target_width * (src_height / src_width) * FONT_ASPECT_RATIO)`, never
/// less than 1. Very wide images still produce a single row.
///
/// # Arguments
/// * `src_width` - Width of the source image in pixels (must be non-zero)
/// * `src_height` - Height of the source image in pixels
/// * `target_width` - Output width in characters
///
/// # Example
/// ```
/// use banner_gen::ascii::target_height;
/// // 100x50 image at 40 columns: floor(40 * 0.5 * 0.55) = 11
/// assert_eq!(target_height(100, 50, 40), 11);
/// ```
pub fn target_height(src_width: u32, src_height: u32, target_width: u32) -> usize {
    if src_width == 0 {
        return 1;
    }

    let rows = f64::from(target_width)
        * (f64::from(src_height) / f64::from(src_width))
        * FONT_ASPECT_RATIO;

    (rows.floor() as usize).max(1)
}
