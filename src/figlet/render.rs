//! Laying out text with a FIGlet font.

use super::font::{FigFont, Glyph, Layout};

/// Line width the renderer wraps at unless told otherwise.
pub const DEFAULT_MAX_WIDTH: usize = 90;

/// One row of big letters being assembled.
#[derive(Debug, Clone)]
struct Block {
    rows: Vec<Vec<char>>,
    glyphs: usize,
}

impl Block {
    fn new(height: usize) -> Self {
        Self {
            rows: vec![Vec::new(); height],
            glyphs: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.glyphs == 0
    }

    // Rows always share one width.
    fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    fn append(&mut self, glyph: &Glyph, layout: Layout) {
        let overlap = match layout {
            Layout::FullWidth => 0,
            Layout::Kerning if self.is_empty() => 0,
            Layout::Kerning => self.kerning_distance(glyph),
        };

        for (row, glyph_row) in self.rows.iter_mut().zip(glyph.rows()) {
            let start = row.len() - overlap;
            for (i, &c) in glyph_row.iter().enumerate() {
                if i < overlap {
                    if c != ' ' {
                        row[start + i] = c;
                    }
                } else {
                    row.push(c);
                }
            }
        }
        self.glyphs += 1;
    }

    /// How far `glyph` can slide left before any two visible characters
    /// collide. Hardblanks count as visible.
    fn kerning_distance(&self, glyph: &Glyph) -> usize {
        let limit = self.width().min(glyph.width());
        self.rows
            .iter()
            .zip(glyph.rows())
            .map(|(row, glyph_row)| {
                let trailing = row.iter().rev().take_while(|&&c| c == ' ').count();
                let leading = glyph_row.iter().take_while(|&&c| c == ' ').count();
                trailing + leading
            })
            .min()
            .unwrap_or(0)
            .min(limit)
    }

    fn write_to(&self, out: &mut String, hardblank: char) {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|&c| if c == hardblank { ' ' } else { c })
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}

/// Render `text` in big letters.
///
/// Words wrap to a new block of rows when a line would grow past
/// `max_width` columns (0 disables wrapping); a single word that does not
/// fit on its own is broken between glyphs. Each `'\n'` in the input starts
/// a new block. Characters the font has no glyph for are skipped.
///
/// Every output line ends in `'\n'` and has trailing whitespace removed.
pub fn render(font: &FigFont, text: &str, max_width: usize) -> String {
    let layout = font.layout();
    let max_width = if max_width == 0 { usize::MAX } else { max_width };
    let mut blocks: Vec<Block> = Vec::new();

    for paragraph in text.lines() {
        let mut line = Block::new(font.height());

        for word in paragraph.split_whitespace() {
            let glyphs: Vec<&Glyph> = word.chars().filter_map(|c| font.glyph(c)).collect();
            if glyphs.is_empty() {
                continue;
            }

            let mut candidate = line.clone();
            if !candidate.is_empty() {
                if let Some(space) = font.glyph(' ') {
                    candidate.append(space, layout);
                }
            }
            for glyph in &glyphs {
                candidate.append(glyph, layout);
            }

            if candidate.width() <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                blocks.push(std::mem::replace(&mut line, Block::new(font.height())));
            }

            // Word on a fresh line, broken wherever it overflows.
            for glyph in glyphs {
                let mut next = line.clone();
                next.append(glyph, layout);
                if next.width() > max_width && !line.is_empty() {
                    blocks.push(std::mem::replace(&mut line, Block::new(font.height())));
                    line.append(glyph, layout);
                } else {
                    line = next;
                }
            }
        }

        blocks.push(line);
    }

    let mut out = String::new();
    for block in &blocks {
        block.write_to(&mut out, font.hardblank());
    }
    out
}
