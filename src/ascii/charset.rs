//! Character ramp presets for ASCII rendering.

/// Standard density ramp (10 levels).
/// Characters ordered from most ink (@) to least ink (space).
pub const STANDARD_CHARSET: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Simple three-level ramp.
pub const SIMPLE_CHARSET: &[char] = &['#', '.', ' '];

/// Block character set (5 levels).
/// Uses Unicode shade blocks for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &['█', '▓', '▒', '░', ' '];

/// Complex ramp (70 levels), the classic "Paul Bourke" sequence.
pub const COMPLEX_CHARSET: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q',
    'w', 'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x',
    'r', 'j', 'f', 't', '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+',
    '~', '<', '>', 'i', '!', 'l', 'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// Named character ramp preset.
///
/// Every preset is authored dark to light: index 0 is the glyph with the most
/// ink, the last index is blank or nearly blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharSet {
    /// 10-level ASCII density ramp
    #[default]
    Standard,
    /// `#`, `.` and space
    Simple,
    /// Unicode shade blocks
    Blocks,
    /// 70-level ASCII ramp
    Complex,
}

impl CharSet {
    /// All presets, in display order.
    pub const ALL: [CharSet; 4] = [
        CharSet::Standard,
        CharSet::Simple,
        CharSet::Blocks,
        CharSet::Complex,
    ];

    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Simple => SIMPLE_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Complex => COMPLEX_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Simple => "simple",
            CharSet::Blocks => "blocks",
            CharSet::Complex => "complex",
        }
    }

    /// Look up a preset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Identify the preset a literal ramp belongs to, if any.
    ///
    /// The match is exact and order-sensitive: a reversed preset is a custom ramp.
    pub fn from_ramp(ramp: &[char]) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.chars() == ramp)
    }
}

impl std::fmt::Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
