//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;

/// Generate ASCII art banners from images and text
#[derive(Parser, Debug)]
#[command(name = "banner-gen")]
#[command(version, about = "Generate ASCII art banners from images and text", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert a logo at 60 columns
    banner-gen image logo.png -w 60

    # Punchier contrast, block glyphs, written straight to resources
    banner-gen image logo.png --contrast 2 --charset blocks -o src/main/resources/banner.txt

    # Big letters with a slogan underneath
    banner-gen text \"Spring Boot\" -f Slant --slogan \"Powered by coffee\"")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image to ASCII art
    Image(ImageArgs),
    /// Render text in big letters with a FIGlet font
    Text(TextArgs),
    /// List character ramp presets
    Charsets,
    /// List fonts available in the font directory
    Fonts {
        /// Directory holding .flf files
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ImageArgs {
    /// Image file (PNG, JPEG, GIF, BMP or WebP)
    pub path: PathBuf,

    /// Output width in characters
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Contrast multiplier around mid-gray
    #[arg(long)]
    pub contrast: Option<f64>,

    /// Brightness offset added after contrast
    #[arg(long, short, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Swap the light/dark direction
    #[arg(long, short)]
    pub invert: bool,

    /// Character ramp preset
    #[arg(long, conflicts_with = "ramp")]
    pub charset: Option<CharacterSet>,

    /// Custom ramp, densest glyph first
    #[arg(long)]
    pub ramp: Option<String>,

    /// Line printed centered under the art
    #[arg(long)]
    pub slogan: Option<String>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TextArgs {
    /// Text to render
    pub text: String,

    /// Font name (file stem of a .flf file)
    #[arg(long, short)]
    pub font: Option<String>,

    /// Directory holding .flf files
    #[arg(long)]
    pub font_dir: Option<PathBuf>,

    /// Wrap lines wider than this many columns (0 = never)
    #[arg(long)]
    pub max_width: Option<usize>,

    /// Line printed centered under the text
    #[arg(long)]
    pub slogan: Option<String>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
