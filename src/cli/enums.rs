//! CLI enum types for character set options.

use clap::ValueEnum;

use crate::ascii;

/// Character ramp preset for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Simple,
    Blocks,
    Complex,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Simple => ascii::CharSet::Simple,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Complex => ascii::CharSet::Complex,
        }
    }
}
