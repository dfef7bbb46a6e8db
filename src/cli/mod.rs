//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ImageArgs, TextArgs};
pub use commands::{handle_config_action, list_charsets, list_fonts, render_image, render_text, run};
pub use enums::CharacterSet;
