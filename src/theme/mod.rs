// SPDX-License-Identifier: MPL-2.0
//! Pluggable message styling.
//!
//! The presenter never looks at styles. Renderers consume a
//! [`StyleProvider`]; [`ThemeRegistry`] is the file-backed implementation
//! that merges custom design files over the built-in design.

mod design;

pub use design::{Design, MessageStyle};

use crate::error::{Result, ThemeError};
use crate::message::MessageKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Name that always resolves to the built-in design.
pub const BUILTIN_THEME: &str = "default";

/// Source of per-kind styles for a renderer.
pub trait StyleProvider {
    /// Loads the design called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the design is missing or invalid. The
    /// styles in effect before the call are kept.
    fn load(&mut self, name: &str) -> Result<()>;

    /// Style for messages of `kind`.
    fn style(&self, kind: MessageKind) -> Option<&MessageStyle>;
}

/// Designs loaded from `<search_dir>/<name>.toml`.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    search_dir: Option<PathBuf>,
    design: Design,
    loaded: Vec<String>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self {
            search_dir: None,
            design: Design::builtin(),
            loaded: Vec::new(),
        }
    }
}

impl ThemeRegistry {
    /// Registry with only the built-in design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that looks up design files in `dir`.
    #[must_use]
    pub fn with_search_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Custom designs applied since the last reset, oldest first.
    #[must_use]
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    #[must_use]
    pub fn design(&self) -> &Design {
        &self.design
    }

    fn design_path(&self, name: &str) -> Option<PathBuf> {
        let dir = self.search_dir.as_ref()?;
        let file = if Path::new(name).extension().is_some() {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{name}.toml"))
        };
        Some(dir.join(file))
    }
}

impl StyleProvider for ThemeRegistry {
    fn load(&mut self, name: &str) -> Result<()> {
        if name == BUILTIN_THEME {
            self.design = Design::builtin();
            self.loaded.clear();
            return Ok(());
        }

        let path = self
            .design_path(name)
            .filter(|path| path.is_file())
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
        let content = fs::read_to_string(&path)?;
        let custom = Design::parse(&content)?;

        self.design.merge(&custom);
        self.loaded.push(name.to_string());
        log::debug!("merged design {} from {}", name, path.display());
        Ok(())
    }

    fn style(&self, kind: MessageKind) -> Option<&MessageStyle> {
        self.design.style(kind)
    }
}
