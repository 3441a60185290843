//! Where a catalog comes from.
//!
//! Generation only ever sees a [`Catalog`]; sources decide how one is built.

use super::catalog::{Catalog, EnumGroup};
use super::naming::DEFAULT_NAMESPACE;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Produces a validated catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;

    /// Short description for log lines and `info` output.
    fn describe(&self) -> String;
}

/// The input enums shipped with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog> {
        let groups = vec![
            EnumGroup::new("mouse btn", ["left", "right", "middle", "eoe"])?,
            EnumGroup::new(
                "mouse action",
                ["move", "btn_up", "btn_down", "mwheel_up", "mwheel_down", "eoe"],
            )?,
            EnumGroup::new("key code", KEY_CODES.iter().copied())?,
        ];
        Catalog::new(DEFAULT_NAMESPACE, groups)
    }

    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }
}

// Spellings are part of the published ABI and stay as they are.
const KEY_CODES: &[&str] = &[
    // alphabet
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    // number row
    "n0", "n1", "n2", "n3", "n4", "n5", "n6", "n7", "n8", "n9",
    // punctuation in the main area
    "backquote", "minus", "equal", "lbracket", "rbracket", "backslash",
    "semicolon", "quote", "comma", "period", "slash",
    // whitespace and editing
    "space", "enter", "backspace", "tab",
    // non-character keys
    "escape", "lshfit", "rshfit", "lctrl", "rctrl", "lalt", "ralt", "up",
    "down", "left", "right",
    "eoe",
];

/// A catalog document on disk.
#[derive(Debug, Clone)]
pub struct TomlCatalogFile {
    path: PathBuf,
}

impl TomlCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for TomlCatalogFile {
    fn load(&self) -> Result<Catalog> {
        info!("Loading enum catalog from {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        debug!("Catalog file size: {} bytes", content.len());
        Catalog::from_toml_str(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the file source when a path is configured, the builtin one otherwise.
pub fn catalog_source(path: Option<&Path>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(TomlCatalogFile::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}
