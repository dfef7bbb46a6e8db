//! Banner file composition.
//!
//! Joins rendered art with an optional slogan line and writes the result,
//! typically to a `banner.txt` picked up by an application at startup.

use std::path::{Path, PathBuf};

/// File name used when no output path is configured.
pub const DEFAULT_FILE_NAME: &str = "banner.txt";

/// Append a slogan, centered on `width` columns, below the art.
///
/// The slogan starts at column `width / 2 - len / 2` (integer halves, never
/// negative) and is separated from the art by one `'\n'`. Since rendered art
/// already ends in a newline, this leaves a blank line between the two.
/// An empty or whitespace-only slogan leaves the art untouched.
pub fn compose(art: &str, slogan: Option<&str>, width: usize) -> String {
    let slogan = match slogan.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return art.to_string(),
    };

    let pad = (width / 2).saturating_sub(slogan.chars().count() / 2);
    let mut out = String::with_capacity(art.len() + 1 + pad + slogan.len());
    out.push_str(art);
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(slogan);
    out
}

/// Width of the widest line in `text`, in characters.
pub fn text_width(text: &str) -> usize {
    text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Write a banner, creating parent directories as needed.
pub fn write(path: &Path, contents: &str) -> Result<PathBuf, std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path.to_path_buf())
}
