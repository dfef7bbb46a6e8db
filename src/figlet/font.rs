//! FIGlet font (`.flf`) parsing.

use std::collections::HashMap;

use super::FontError;

/// Signature every FIGlet 2 font header starts with.
pub const SIGNATURE: &str = "flf2a";

/// Code points of the seven optional "Deutsch" glyphs, in file order.
pub const DEUTSCH_CODES: [u32; 7] = [196, 214, 220, 228, 246, 252, 223];

/// How glyphs are placed next to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every glyph keeps its full width.
    FullWidth,
    /// Glyphs slide together until they touch.
    Kerning,
}

/// A single glyph: `height` rows of equal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Glyph {
    fn new(mut rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

/// A parsed FIGlet font.
#[derive(Debug, Clone)]
pub struct FigFont {
    name: String,
    hardblank: char,
    height: usize,
    baseline: usize,
    max_length: usize,
    old_layout: i32,
    print_direction: u8,
    full_layout: Option<u32>,
    glyphs: HashMap<char, Glyph>,
}

impl FigFont {
    /// Parse the contents of a `.flf` file.
    ///
    /// The 95 printable ASCII glyphs are required. The Deutsch glyphs and
    /// code-tagged glyphs that follow are read when present.
    pub fn parse(name: &str, source: &str) -> Result<Self, FontError> {
        let mut lines = source.lines().enumerate().map(|(i, l)| (i + 1, l));
        let parse_err = |line: usize, reason: String| FontError::Parse {
            name: name.to_string(),
            line,
            reason,
        };

        let (_, header) = lines
            .next()
            .ok_or_else(|| parse_err(1, "empty font file".to_string()))?;

        let mut fields = header.split_whitespace();
        let signature = fields.next().unwrap_or("");
        if !signature.starts_with(SIGNATURE) {
            return Err(parse_err(1, format!("missing '{}' signature", SIGNATURE)));
        }
        let hardblank = signature
            .chars()
            .nth(SIGNATURE.len())
            .ok_or_else(|| parse_err(1, "missing hardblank character".to_string()))?;

        let mut number = |field: &str| -> Result<i64, FontError> {
            let raw = fields
                .next()
                .ok_or_else(|| parse_err(1, format!("missing {}", field)))?;
            raw.parse::<i64>()
                .map_err(|_| parse_err(1, format!("invalid {} '{}'", field, raw)))
        };

        let height = number("height")?;
        let baseline = number("baseline")?;
        let max_length = number("max length")?;
        let old_layout = number("old layout")?;
        let comment_lines = number("comment line count")?;
        let print_direction = number("print direction").ok();
        let full_layout = number("full layout").ok();

        if height < 1 {
            return Err(parse_err(1, format!("height must be positive, got {}", height)));
        }
        if comment_lines < 0 {
            return Err(parse_err(1, "negative comment line count".to_string()));
        }

        let height = height as usize;
        for _ in 0..comment_lines {
            lines.next();
        }

        let mut glyphs = HashMap::new();

        // Required printable ASCII, then the optional Deutsch set.
        let fixed_codes = (32u32..=126).chain(DEUTSCH_CODES);
        for (n, code) in fixed_codes.enumerate() {
            let required = n < 95;
            match read_glyph(&mut lines, height) {
                Ok(glyph) => {
                    if let Some(ch) = char::from_u32(code) {
                        glyphs.insert(ch, glyph);
                    }
                }
                Err(line) if required => {
                    return Err(parse_err(
                        line,
                        format!("glyph for {:?} is incomplete", char::from_u32(code).unwrap_or('?')),
                    ));
                }
                Err(_) => break,
            }
        }

        // Code-tagged glyphs: a code line, then `height` glyph lines.
        while let Some((line_no, tag)) = lines.next() {
            let code = match tag.split_whitespace().next().and_then(parse_code) {
                Some(code) => code,
                None if tag.trim().is_empty() => continue,
                None => {
                    log::warn!("Font '{}': unreadable code tag at line {}", name, line_no);
                    break;
                }
            };
            let glyph = read_glyph(&mut lines, height)
                .map_err(|line| parse_err(line, format!("glyph for code {} is incomplete", code)))?;
            // Negative codes are translation-table entries with no character.
            if let Some(ch) = u32::try_from(code).ok().and_then(char::from_u32) {
                glyphs.insert(ch, glyph);
            }
        }

        log::debug!("Parsed font '{}' ({} glyphs, height {})", name, glyphs.len(), height);

        Ok(Self {
            name: name.to_string(),
            hardblank,
            height,
            baseline: baseline.max(0) as usize,
            max_length: max_length.max(0) as usize,
            old_layout: old_layout as i32,
            print_direction: print_direction.unwrap_or(0).clamp(0, 1) as u8,
            full_layout: full_layout.and_then(|v| u32::try_from(v).ok()),
            glyphs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn hardblank(&self) -> char {
        self.hardblank
    }

    /// 0 for left-to-right, 1 for right-to-left.
    pub fn print_direction(&self) -> u8 {
        self.print_direction
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Horizontal layout requested by the header.
    ///
    /// The full layout field wins when present: bits 64 (fitting) and 128
    /// (smushing) both select kerning. Otherwise old layout -1 means full
    /// width and anything else kerning. Smushing rules are not applied.
    pub fn layout(&self) -> Layout {
        match self.full_layout {
            Some(full) if full & (64 | 128) == 0 => Layout::FullWidth,
            Some(_) => Layout::Kerning,
            None if self.old_layout < 0 => Layout::FullWidth,
            None => Layout::Kerning,
        }
    }
}

/// Read `height` glyph lines. On a short file, returns the line number
/// where the glyph ran out.
fn read_glyph<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    height: usize,
) -> Result<Glyph, usize> {
    let mut rows = Vec::with_capacity(height);
    let mut last = 0;
    for _ in 0..height {
        match lines.next() {
            Some((line_no, line)) => {
                last = line_no;
                rows.push(strip_endmarks(line));
            }
            None => return Err(last + 1),
        }
    }
    Ok(Glyph::new(rows))
}

/// Drop trailing whitespace, then every trailing copy of the end-mark
/// character (the last character on the line).
fn strip_endmarks(line: &str) -> Vec<char> {
    let mut chars: Vec<char> = line.trim_end().chars().collect();
    if let Some(&endmark) = chars.last() {
        while chars.last() == Some(&endmark) {
            chars.pop();
        }
    }
    chars
}

/// Parse a code tag: decimal, `0x` hex or leading-zero octal, optionally negative.
fn parse_code(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let value = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse().ok()?
    };
    Some(if negative { -value } else { value })
}
