//! Unit tests for the image quantizer.
//!
//! These tests verify the properties every conversion must hold:
//! - Grid dimensions
//! - Determinism
//! - Ramp direction and monotonicity
//! - Inversion
//! - Transparency
//! - Configuration rejection

use banner_gen::ascii::*;

fn opts(width: u32, ramp: &str) -> RenderOptions {
    RenderOptions {
        width,
        contrast: 1.0,
        brightness: 0.0,
        inverted: false,
        ramp: ramp.chars().collect(),
    }
}

fn gray(width: u32, height: u32, level: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, [level, level, level, 255])
}

/// Position of `c` in the authored ramp.
fn ramp_pos(ramp: &[char], c: char) -> usize {
    ramp.iter()
        .position(|&r| r == c)
        .unwrap_or_else(|| panic!("{:?} not in ramp", c))
}

// ==================== Dimension Tests ====================

#[test]
fn test_dimensions_follow_aspect_formula() {
    let cases = [
        (100, 50, 40, 11),  // 40 * 0.5 * 0.55 = 11
        (640, 480, 80, 33), // 80 * 0.75 * 0.55 = 33
        (300, 300, 20, 11), // 20 * 1 * 0.55 = 11
        (50, 200, 30, 66),  // 30 * 4 * 0.55 = 66
    ];

    for (w, h, cols, rows) in cases {
        let grid = quantize(&gray(w, h, 128), &opts(cols, "@. ")).unwrap();
        assert_eq!(grid.height(), rows, "{}x{} at {} cols", w, h, cols);
        assert_eq!(grid.width(), cols as usize);
        for row in grid.rows() {
            assert_eq!(row.len(), cols as usize);
        }
    }
}

#[test]
fn test_extreme_aspect_has_one_row() {
    let grid = quantize(&gray(2000, 1, 200), &opts(20, "#. ")).unwrap();
    assert_eq!(grid.height(), 1);
    assert_eq!(grid.to_text().lines().count(), 1);
}

#[test]
fn test_width_beyond_ui_range_is_accepted() {
    let grid = quantize(&gray(10, 10, 0), &opts(500, "#. ")).unwrap();
    assert_eq!(grid.width(), 500);
    assert_eq!(grid.height(), 275);
}

#[test]
fn test_single_column() {
    let grid = quantize(&gray(10, 40, 255), &opts(1, "#. ")).unwrap();
    // 1 * 4 * 0.55 = 2.2
    assert_eq!(grid.to_text(), "#\n#\n");
}

// ==================== Serialization Tests ====================

#[test]
fn test_every_row_ends_with_one_newline() {
    let grid = quantize(&gray(100, 100, 255), &opts(5, "#. ")).unwrap();
    let text = grid.to_text();
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
    assert_eq!(text.matches('\n').count(), grid.height());
    assert_eq!(text.len(), (grid.width() + 1) * grid.height());
}

// ==================== Determinism Tests ====================

#[test]
fn test_repeated_calls_are_identical() {
    let mut data = Vec::new();
    for i in 0..(37 * 23) {
        let v = (i * 7 % 256) as u8;
        data.extend_from_slice(&[v, v.wrapping_mul(3), v.wrapping_add(40), 255]);
    }
    let image = PixelBuffer::from_rgba(37, 23, data).unwrap();
    let options = RenderOptions::default().with_charset(CharSet::Complex);

    let first = quantize(&image, &options).unwrap().to_text();
    for _ in 0..5 {
        assert_eq!(quantize(&image, &options).unwrap().to_text(), first);
    }
}

// ==================== Ramp Direction Tests ====================

#[test]
fn test_black_selects_last_glyph_white_selects_first() {
    let ramp: Vec<char> = STANDARD_CHARSET.to_vec();
    let options = RenderOptions {
        ramp: ramp.clone(),
        ..opts(4, "")
    };

    let black = quantize(&gray(8, 8, 0), &options).unwrap();
    let white = quantize(&gray(8, 8, 255), &options).unwrap();

    assert!(black.cells().iter().all(|&c| c == ' '));
    assert!(white.cells().iter().all(|&c| c == '@'));
}

#[test]
fn test_ramp_monotonicity_over_flat_images() {
    for set in CharSet::ALL {
        let ramp = set.chars();
        let options = RenderOptions {
            ramp: ramp.to_vec(),
            ..opts(4, "")
        };

        let levels: Vec<u8> = (0..=7).map(|i| i * 32).chain([255]).collect();
        let positions: Vec<usize> = levels
            .iter()
            .map(|&level| {
                let grid = quantize(&gray(8, 8, level), &options).unwrap();
                ramp_pos(ramp, grid.row(0)[0])
            })
            .collect();

        // Brighter input never moves toward the blank end of the ramp.
        for pair in positions.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "{}: positions not monotone: {:?}",
                set,
                positions
            );
        }
        assert_eq!(positions.first(), Some(&(ramp.len() - 1)));
        assert_eq!(positions.last(), Some(&0));
    }
}

#[test]
fn test_mid_gray_standard_ramp() {
    // 128 / 255 * 9 = 4.5 -> bucket 4 -> ramp[9 - 4] = '='
    let grid = quantize(&gray(4, 4, 128), &opts(2, "@%#*+=-:. ")).unwrap();
    assert_eq!(grid.row(0), &['=', '=']);
}

// ==================== Tone Tests ====================

#[test]
fn test_contrast_pushes_away_from_mid() {
    let ramp = "@%#*+=-:. ";
    let mut options = opts(2, ramp);

    let flat = quantize(&gray(4, 4, 160), &options).unwrap().row(0)[0];
    options.contrast = 3.0;
    let punchy = quantize(&gray(4, 4, 160), &options).unwrap().row(0)[0];

    let chars: Vec<char> = ramp.chars().collect();
    assert!(ramp_pos(&chars, punchy) < ramp_pos(&chars, flat));
}

#[test]
fn test_brightness_offset_saturates() {
    let mut options = opts(2, "#. ");
    options.brightness = 100.0;
    let grid = quantize(&gray(4, 4, 200), &options).unwrap();
    assert_eq!(grid.row(0), &['#', '#']);

    options.brightness = -100.0;
    let grid = quantize(&gray(4, 4, 50), &options).unwrap();
    assert_eq!(grid.row(0), &[' ', ' ']);
}

#[test]
fn test_zero_contrast_is_uniform_mid() {
    let mut options = opts(3, "#. ");
    options.contrast = 0.0;
    // Everything becomes 128 -> bucket 1 -> '.'
    for level in [0, 90, 255] {
        let grid = quantize(&gray(6, 6, level), &options).unwrap();
        assert!(grid.cells().iter().all(|&c| c == '.'), "level {}", level);
    }
}

// ==================== Inversion Tests ====================

#[test]
fn test_invert_complements_ramp_index() {
    // Black/white columns: luminance is exactly 0 or 255, where the
    // complement is exact.
    let mut pixels = Vec::new();
    for _y in 0..8 {
        for x in 0..8 {
            let v = if x % 2 == 0 { 0 } else { 255 };
            pixels.push([v, v, v, 255]);
        }
    }
    let image = PixelBuffer::from_pixels(8, 8, &pixels).unwrap();

    for set in CharSet::ALL {
        let ramp = set.chars();
        let mut options = RenderOptions {
            ramp: ramp.to_vec(),
            ..opts(8, "")
        };

        let normal = quantize(&image, &options).unwrap();
        options.inverted = true;
        let inverted = quantize(&image, &options).unwrap();

        let n = ramp.len();
        for (a, b) in normal.cells().iter().zip(inverted.cells()) {
            assert_eq!(
                ramp_pos(ramp, *b),
                n - 1 - ramp_pos(ramp, *a),
                "{}: {:?} vs {:?}",
                set,
                a,
                b
            );
        }
    }
}

#[test]
fn test_invert_mid_gray_flips_tone_before_lookup() {
    // Tone is mirrored around 255 first, then looked up, so the index
    // complement is not exact off the black/white points.
    let ramp = STANDARD_CHARSET;
    let mut options = RenderOptions {
        width: 2,
        contrast: 1.2,
        brightness: 0.0,
        inverted: false,
        ramp: ramp.to_vec(),
    };
    let tone = apply_tone(luma(100, 100, 100), 1.2, 0.0);

    let normal = quantize(&gray(4, 4, 100), &options).unwrap();
    options.inverted = true;
    let inverted = quantize(&gray(4, 4, 100), &options).unwrap();

    // tone ~94.4 -> bucket 3 -> '-'; 255 - tone ~160.6 -> bucket 5 -> '+'
    assert_eq!(normal.row(0), &[select_char(ramp, tone); 2]);
    assert_eq!(inverted.row(0), &[select_char(ramp, 255.0 - tone); 2]);
    assert_eq!(normal.row(0)[0], '-');
    assert_eq!(inverted.row(0)[0], '+');
    // Bucket complement would have given '*'
    assert_ne!(inverted.row(0)[0], ramp[ramp.len() - 1 - ramp_pos(ramp, '-')]);
}

// ==================== Transparency Tests ====================

#[test]
fn test_transparent_pixels_are_spaces_under_any_settings() {
    let image = PixelBuffer::filled(6, 6, [255, 0, 128, 0]);
    for inverted in [false, true] {
        for contrast in [0.0, 1.0, 3.0] {
            for brightness in [-100.0, 0.0, 100.0] {
                let options = RenderOptions {
                    width: 6,
                    contrast,
                    brightness,
                    inverted,
                    ramp: vec!['#', '@', 'X'],
                };
                let grid = quantize(&image, &options).unwrap();
                assert!(grid.cells().iter().all(|&c| c == ' '));
            }
        }
    }
}

#[test]
fn test_partially_transparent_cell_is_rendered() {
    // Half the source block is opaque white, so the cell has alpha 128.
    let image = PixelBuffer::from_pixels(
        2,
        2,
        &[[255, 255, 255, 255], [0, 0, 0, 0], [255, 255, 255, 255], [0, 0, 0, 0]],
    )
    .unwrap();
    let grid = quantize(&image, &opts(1, "#. ")).unwrap();
    assert_eq!(grid.to_text(), "#\n");
}

// ==================== Rejection Tests ====================

#[test]
fn test_zero_width_rejected() {
    let err = quantize(&gray(4, 4, 0), &opts(0, "#. ")).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_short_ramps_rejected() {
    for ramp in ["", "#"] {
        let err = quantize(&gray(4, 4, 0), &opts(4, ramp)).unwrap_err();
        assert!(err.is_config(), "ramp {:?}", ramp);
    }
}

#[test]
fn test_non_finite_options_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut options = opts(4, "#. ");
        options.contrast = bad;
        assert!(quantize(&gray(4, 4, 0), &options).unwrap_err().is_config());

        let mut options = opts(4, "#. ");
        options.brightness = bad;
        assert!(quantize(&gray(4, 4, 0), &options).unwrap_err().is_config());
    }
}

#[test]
fn test_zero_dimension_image_rejected() {
    for (w, h) in [(0, 0), (0, 10), (10, 0)] {
        let image = PixelBuffer::from_rgba(w, h, Vec::new()).unwrap();
        let err = quantize(&image, &opts(4, "#. ")).unwrap_err();
        assert!(err.is_image(), "{}x{}", w, h);
    }
}
