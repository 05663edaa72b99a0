//! Directory scanning for the pages a carousel shows.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

const DEFAULT_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Options controlling directory scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional maximum recursion depth. `None` or `Some(0)` means unlimited.
    pub max_depth: Option<usize>,
    /// Optional override for allowed extensions (lowercase, without dot).
    pub exts: Option<Vec<String>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            max_depth: None,
            exts: None,
        }
    }
}

/// Return `true` if `path` has an allowed extension.
#[must_use]
pub fn is_supported_image(path: &Path, exts: Option<&[String]>) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    match exts {
        Some(exts) => exts.iter().any(|e| *e == ext),
        None => DEFAULT_EXTS.contains(&ext.as_str()),
    }
}

/// Collect the pages under `root`, sorted by path so page order is stable.
///
/// # Errors
/// Returns [`Error::BadDir`] if `root` is missing or not a directory, and
/// [`Error::EmptyCollection`] if nothing matched.
pub fn scan_pages(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::BadDir(root.to_string_lossy().into_owned()));
    }

    let mut wd = WalkDir::new(root).follow_links(true);
    if !opts.recursive {
        wd = wd.max_depth(1);
    } else if let Some(d) = opts.max_depth
        && d > 0
    {
        wd = wd.max_depth(d);
    }

    let mut out: Vec<PathBuf> = wd
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e))
        .flatten()
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(|p| is_supported_image(p, opts.exts.as_deref()))
        .collect();

    if out.is_empty() {
        return Err(Error::EmptyCollection);
    }
    out.sort();
    debug!(root = %root.display(), pages = out.len(), "scan complete");
    Ok(out)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}
