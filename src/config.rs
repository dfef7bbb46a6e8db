//! Configuration file handling for banner-gen.
//!
//! Loads configuration from `~/.config/banner-gen/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, QuantizeError, RenderOptions, DEFAULT_CONTRAST, DEFAULT_WIDTH};
use crate::figlet::{DEFAULT_FONT, DEFAULT_MAX_WIDTH};

/// Configuration file structure for banner-gen.
/// Loaded from ~/.config/banner-gen/config.toml (or custom path via --config).
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_contrast")]
    pub contrast: f64,
    #[serde(default)]
    pub brightness: i32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Custom ramp; takes precedence over `charset`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            contrast: default_contrast(),
            brightness: 0,
            invert: false,
            charset: None,
            ramp: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct BannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FontConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_font")]
    pub default: String,
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: None,
            default: default_font(),
            max_width: default_max_width(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_contrast() -> f64 {
    DEFAULT_CONTRAST
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

/// Contents written by `banner-gen config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# banner-gen configuration

[render]
# Output width in characters
width = 80
# Contrast multiplier around mid-gray (1.0 = unchanged)
contrast = 1.2
# Brightness offset added after contrast
brightness = 0
# Swap the light/dark direction
invert = false
# Preset ramp: standard, simple, blocks, complex
charset = "standard"
# Custom ramp, densest glyph first (overrides charset)
# ramp = "@%#*+=-:. "

[banner]
# Line printed centered under the art
# slogan = "Powered by coffee"
# Write here instead of stdout
# output = "src/main/resources/banner.txt"

[fonts]
# Directory holding .flf font files
# dir = "~/.local/share/banner-gen/fonts"
default = "Standard"
max_width = 90
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Build render options from the `[render]` table.
    pub fn render_options(&self) -> Result<RenderOptions, QuantizeError> {
        let options = self.apply_ramp(self.base_render_options())?;
        options.validate()?;
        Ok(options)
    }

    /// The `[render]` tone and size values on top of the defaults, with the
    /// default ramp and no validation. Callers layering other overrides on
    /// top validate once at the end.
    pub fn base_render_options(&self) -> RenderOptions {
        let render = &self.render;
        RenderOptions {
            width: render.width,
            contrast: render.contrast,
            brightness: f64::from(render.brightness),
            inverted: render.invert,
            ..RenderOptions::default()
        }
    }

    /// Replace the ramp of `options` with the configured one. `ramp` wins
    /// over `charset`; with neither set `options` is returned unchanged.
    pub fn apply_ramp(&self, options: RenderOptions) -> Result<RenderOptions, QuantizeError> {
        let render = &self.render;
        match (&render.ramp, &render.charset) {
            (Some(ramp), _) => Ok(options.with_ramp(ramp)),
            (None, Some(name)) => Ok(options.with_charset(parse_charset(name)?)),
            (None, None) => Ok(options),
        }
    }

    /// Font directory, falling back to the platform data directory.
    pub fn font_dir(&self) -> PathBuf {
        self.fonts.dir.clone().unwrap_or_else(default_font_dir)
    }
}

/// Resolve a charset name, listing the valid ones on failure.
pub fn parse_charset(name: &str) -> Result<CharSet, QuantizeError> {
    CharSet::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = CharSet::ALL.iter().map(|c| c.name()).collect();
        QuantizeError::InvalidConfig {
            reason: format!("unknown charset '{}' (expected one of: {})", name, known.join(", ")),
        }
    })
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("banner-gen").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/banner-gen/config.toml")
        })
}

/// Get the default font directory.
/// Default: ~/.local/share/banner-gen/fonts/
pub fn default_font_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("banner-gen")
        .join("fonts")
}
