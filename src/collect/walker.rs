//! Suffix-matched file traversal
//!
//! Built on the ignore crate's WalkBuilder. Defaults are deliberately wide
//! open: hidden entries are visited and ignore files are not consulted, so
//! a bare run sees exactly what the filesystem holds. Siblings are walked
//! in sorted order, which keeps bundle output stable across runs and
//! platforms. Any enumeration failure aborts the walk.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use super::CollectError;

/// Traversal options
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// File name suffix to match, including the leading dot
    pub suffix: String,
    /// Maximum directory depth from the root
    pub max_depth: Option<usize>,
    /// Skip hidden files and directories (dotfiles)
    pub skip_hidden: bool,
    /// Respect .gitignore and other ignore rules
    pub use_gitignore: bool,
    /// Canonical path to leave out of the results (the bundle itself)
    pub exclude: Option<PathBuf>,
}

/// Enumerate matched files under root, in traversal order
///
/// Directories are never returned. A symlink pointing at a directory
/// counts as a directory and is not descended into; a broken symlink
/// counts as a file and is left for the reader to report.
pub fn matched_files(root: &Path, opts: &WalkOptions) -> Result<Vec<PathBuf>, CollectError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(opts.skip_hidden)
        .parents(opts.use_gitignore)
        .ignore(opts.use_gitignore)
        .git_ignore(opts.use_gitignore)
        .git_global(opts.use_gitignore)
        .git_exclude(opts.use_gitignore)
        // Honor .gitignore files even when the tree is not a git repo
        .require_git(false)
        .sort_by_file_path(|a, b| a.cmp(b));

    if let Some(depth) = opts.max_depth {
        builder.max_depth(Some(depth));
    }

    let mut matched = Vec::new();

    for entry in builder.build() {
        let entry = entry?;

        // The root itself is depth 0
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(&opts.suffix) {
            continue;
        }

        if let Some(exclude) = &opts.exclude {
            if path.canonicalize().ok().as_deref() == Some(exclude.as_path()) {
                continue;
            }
        }

        matched.push(path.to_path_buf());
    }

    Ok(matched)
}
