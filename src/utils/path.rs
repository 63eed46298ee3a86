//! Path helpers for stylesheet import resolution.
//!
//! Import paths are resolved textually (`folder + import`), so these helpers
//! work on strings and accept both `/` and `\` separators.

use std::path::{Component, Path, PathBuf};

/// Folder portion of a path, including the trailing separator.
///
/// Returns an empty string when the path has no separator.
pub fn folder_path(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

/// Resolve an import path against the folder of the importing document.
pub fn resolve_import(importer: &str, import: &str) -> String {
    format!("{}{}", folder_path(importer), import)
}

/// Key used to detect documents that were already scheduled.
///
/// Existing files are canonicalized through the filesystem so different
/// spellings of the same file collapse. Missing files fall back to lexical
/// normalization; reading them fails later anyway.
pub fn visit_key(path: &str) -> PathBuf {
    let normalized = normalize_separators(path);
    std::fs::canonicalize(&normalized).unwrap_or_else(|_| lexical_normalize(&normalized))
}

fn normalize_separators(path: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(path)
    } else {
        PathBuf::from(path.replace('\\', "/"))
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
