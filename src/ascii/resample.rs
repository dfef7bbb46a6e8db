//! Box-filter resampling of RGBA buffers to a character grid.

use super::buffer::{PixelBuffer, CHANNELS};

/// Resample an RGBA image to exactly `width` x `height` pixels.
///
/// Each destination pixel averages the source rectangle it covers:
/// columns `[floor(x * sw / tw), floor((x + 1) * sw / tw))` and likewise for
/// rows. When the rectangle is empty (upsampling), it is widened to one
/// source pixel, so enlarging behaves like nearest-neighbour.
///
/// Color channels are weighted by alpha, alpha itself is a plain mean. A
/// cell whose source pixels are all fully transparent comes out as
/// `[0, 0, 0, 0]`. All averages round half up.
///
/// # Arguments
/// * `src` - Source image
/// * `width` - Output width in pixels
/// * `height` - Output height in pixels
///
/// # Returns
/// A new buffer of `width * height` pixels, or an empty buffer when either
/// the source or the target has a zero dimension.
///
/// # Example
/// ```
/// use banner_gen::ascii::{resample, PixelBuffer};
/// let src = PixelBuffer::filled(640, 480, [200, 100, 50, 255]);
/// let small = resample(&src, 40, 20);
/// assert_eq!((small.width(), small.height()), (40, 20));
/// assert_eq!(small.pixel(0, 0), [200, 100, 50, 255]);
/// ```
pub fn resample(src: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    if src.is_empty() || width == 0 || height == 0 {
        return PixelBuffer::from_parts(0, 0, Vec::new());
    }

    let img_width = src.width();
    let img_height = src.height();
    let data = src.as_raw();

    // Cell size in source pixels (as floats for accurate mapping)
    let mut out = Vec::with_capacity(width as usize * height as usize * CHANNELS);

    for cy in 0..height {
        let (start_y, end_y) = span(cy, height, img_height);

        for cx in 0..width {
            let (start_x, end_x) = span(cx, width, img_width);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut sum_a = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y {
                let row = py as usize * img_width as usize;
                for px in start_x..end_x {
                    let idx = (row + px as usize) * CHANNELS;
                    let a = u64::from(data[idx + 3]);
                    sum_r += u64::from(data[idx]) * a;
                    sum_g += u64::from(data[idx + 1]) * a;
                    sum_b += u64::from(data[idx + 2]) * a;
                    sum_a += a;
                    count += 1;
                }
            }

            if sum_a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                out.extend_from_slice(&[
                    rounded_div(sum_r, sum_a),
                    rounded_div(sum_g, sum_a),
                    rounded_div(sum_b, sum_a),
                    rounded_div(sum_a, count),
                ]);
            }
        }
    }

    PixelBuffer::from_parts(width, height, out)
}

/// Source pixel range `[floor(index * limit / cells), floor((index + 1) * limit / cells))`
/// covered by output cell `index`, widened to at least one pixel and kept
/// inside `[0, limit)`.
#[inline]
fn span(index: u32, cells: u32, limit: u32) -> (u32, u32) {
    let bound = |i: u32| (u64::from(i) * u64::from(limit) / u64::from(cells)) as u32;
    let start = bound(index).min(limit - 1);
    let end = bound(index + 1).clamp(start + 1, limit);
    (start, end)
}

#[inline]
fn rounded_div(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count).min(255) as u8
}
