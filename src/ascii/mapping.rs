//! Luminance transforms and luminance-to-character mapping.

/// Midpoint that contrast scales around.
pub const CONTRAST_PIVOT: f64 = 128.0;

/// Apply contrast, then brightness, then clamp to `[0, 255]`.
///
/// `gray = clamp((gray - 128) * contrast + 128 + brightness, 0, 255)`
#[inline]
pub fn apply_tone(gray: f64, contrast: f64, brightness: f64) -> f64 {
    let gray = (gray - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT;
    let gray = gray + brightness;
    gray.clamp(0.0, 255.0)
}

/// Bucket a luminance value into one of `levels` steps.
///
/// `floor(gray / 255 * (levels - 1))`, clamped to `[0, levels - 1]`.
/// Returns 0 when `levels` is 0.
#[inline]
pub fn ramp_index(gray: f64, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let max = levels - 1;
    let idx = ((gray / 255.0) * max as f64).floor();
    if idx.is_nan() || idx <= 0.0 {
        0
    } else {
        (idx as usize).min(max)
    }
}

/// Pick the glyph for a luminance value.
///
/// The bucket index is read from the end of the ramp: `ramp[N - 1 - index]`.
/// With a dark-to-light ramp such as `"@%#*+=-:. "`, black selects the final
/// (blank) glyph and white selects the first (densest) one, which is what a
/// banner printed on a dark console wants.
///
/// # Example
/// ```
/// use banner_gen::ascii::select_char;
/// let ramp = ['#', '.', ' '];
/// assert_eq!(select_char(&ramp, 0.0), ' ');
/// assert_eq!(select_char(&ramp, 255.0), '#');
/// ```
#[inline]
pub fn select_char(ramp: &[char], gray: f64) -> char {
    match ramp.len() {
        0 => ' ',
        n => ramp[n - 1 - ramp_index(gray, n)],
    }
}
