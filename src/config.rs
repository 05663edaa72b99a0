use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::scan::ScanOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    /// Root directory scanned for pages.
    pub photo_library_path: PathBuf,
    /// Whether to descend into subdirectories of the library.
    pub recursive: bool,
    /// Maximum recursion depth; `None` or `0` means unlimited.
    pub max_depth: Option<usize>,
    /// Allowed file extensions (lowercase, without dot). Defaults to common
    /// image formats when absent.
    pub extensions: Option<Vec<String>>,
    /// Page shown first.
    pub start_index: usize,
    /// Suppress the `<` / `>` navigation buttons in the console.
    pub hide_navigation_buttons: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            photo_library_path: PathBuf::new(),
            recursive: true,
            max_depth: None,
            extensions: None,
            start_index: 0,
            hide_navigation_buttons: false,
        }
    }
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(mut self) -> Result<Self> {
        ensure!(
            !self.photo_library_path.as_os_str().is_empty(),
            "photo-library-path must not be empty"
        );
        if let Some(exts) = self.extensions.as_mut() {
            ensure!(!exts.is_empty(), "extensions must list at least one entry");
            for ext in exts.iter_mut() {
                *ext = ext.trim_start_matches('.').to_ascii_lowercase();
                ensure!(!ext.is_empty(), "extensions must not contain blank entries");
            }
        }
        Ok(self)
    }

    /// Scanner settings derived from this configuration.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            max_depth: self.max_depth,
            exts: self.extensions.clone(),
        }
    }
}
