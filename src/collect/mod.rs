//! Collect module - The bundling engine
//!
//! Provides:
//! - walker: suffix-matched traversal in deterministic order
//! - sink: the bundle file sink with digest and byte tracking
//! - collector: the collect pipeline (walk, read, format, write)
//! - scan: dry-run listing of what collect would include
//! - stats: byte/line/token measurements for matched files
//! - watch: re-collect on change (optional)

pub mod collector;
pub mod scan;
pub mod sink;
pub mod stats;
pub mod walker;

#[cfg(feature = "watch")]
pub mod watch;

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run
///
/// A file that cannot be read is not one of these: it is recorded inline
/// in the bundle and the run continues.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot create bundle file {path}: {source}")]
    CreateBundle {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot write to bundle: {0}")]
    WriteBundle(#[from] std::io::Error),
}
