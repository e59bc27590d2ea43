//! Path normalization utilities
//!
//! Ensures all paths emitted in the bundle use '/' as separator, are
//! relative to the root, and carry the `./` prefix.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Prefix a relative path with `./` unless it already starts with it
pub fn dot_slash(relative: &str) -> String {
    if relative.starts_with("./") {
        relative.to_string()
    } else {
        format!("./{}", relative)
    }
}

/// Normalize a filename suffix so it always carries a leading dot
///
/// Without this, `--ext go` would match `cargo`.
pub fn normalize_suffix(suffix: &str) -> String {
    if suffix.starts_with('.') {
        suffix.to_string()
    } else {
        format!(".{}", suffix)
    }
}
