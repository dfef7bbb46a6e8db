//! Process-wide font cache.
//!
//! Fonts are loaded from `<dir>/<name>.flf` the first time they are asked for
//! and kept for the life of the registry. There is no eviction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::font::FigFont;
use super::FontError;
use crate::config::default_font_dir;

/// File extension of FIGlet fonts.
pub const FONT_EXTENSION: &str = "flf";

static GLOBAL: OnceLock<FontRegistry> = OnceLock::new();

/// Load-once-by-name cache of parsed fonts.
#[derive(Debug)]
pub struct FontRegistry {
    dir: PathBuf,
    fonts: Mutex<HashMap<String, Arc<FigFont>>>,
}

impl FontRegistry {
    /// Create an empty registry reading fonts from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fonts: Mutex::new(HashMap::new()),
        }
    }

    /// The shared registry rooted at the default font directory.
    /// Created on first use.
    pub fn global() -> &'static FontRegistry {
        GLOBAL.get_or_init(|| FontRegistry::new(default_font_dir()))
    }

    /// Directory fonts are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get a font, reading and parsing it on the first request.
    ///
    /// The lock is held while loading so concurrent first requests for the
    /// same name read the file once. A failed load is not cached.
    pub fn load(&self, name: &str) -> Result<Arc<FigFont>, FontError> {
        validate_name(name)?;

        let mut fonts = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(font) = fonts.get(name) {
            return Ok(Arc::clone(font));
        }

        let path = self.locate(name)?;
        let source = std::fs::read_to_string(&path).map_err(|e| FontError::Read {
            path: path.clone(),
            source: e,
        })?;
        let font = Arc::new(FigFont::parse(name, &source)?);
        log::info!("Loaded font '{}' from {}", name, path.display());

        fonts.insert(name.to_string(), Arc::clone(&font));
        Ok(font)
    }

    /// True once `name` has been loaded successfully.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.fonts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names loaded so far, sorted.
    pub fn loaded_names(&self) -> Vec<String> {
        let fonts = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = fonts.keys().cloned().collect();
        names.sort();
        names
    }

    /// Font names available on disk, sorted. An absent directory has none.
    pub fn available(&self) -> Result<Vec<String>, FontError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| FontError::Read {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_font_file(path))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Resolve `name` to a file, trying an exact match first and then a
    /// case-insensitive one.
    fn locate(&self, name: &str) -> Result<PathBuf, FontError> {
        let exact = self.dir.join(format!("{}.{}", name, FONT_EXTENSION));
        if exact.is_file() {
            return Ok(exact);
        }

        if let Ok(entries) = std::fs::read_dir(&self.dir) {
            for entry in entries.filter_map(Result::ok) {
                let path = entry.path();
                let matches = is_font_file(&path)
                    && path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .is_some_and(|stem| stem.eq_ignore_ascii_case(name));
                if matches {
                    return Ok(path);
                }
            }
        }

        Err(FontError::NotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        })
    }
}

fn is_font_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(FONT_EXTENSION))
}

/// Font names are plain file stems; anything that could leave the font
/// directory is refused.
fn validate_name(name: &str) -> Result<(), FontError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
    {
        return Err(FontError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("ANSI Shadow").is_ok());
        assert!(validate_name("Standard").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("../etc/passwd").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name(" Big").is_err());
    }

    #[test]
    fn test_missing_dir_has_no_fonts() {
        let registry = FontRegistry::new("/nonexistent/banner-gen/fonts");
        assert!(registry.available().unwrap().is_empty());
        assert!(matches!(
            registry.load("Standard"),
            Err(FontError::NotFound { .. })
        ));
        assert!(!registry.is_loaded("Standard"));
    }
}
