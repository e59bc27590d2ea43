//! Collect pipeline
//!
//! Drives a full run: create the bundle sink, enumerate matched files,
//! read each one, and stream formatted blocks to the sink. Reading never
//! aborts the run; a failed read becomes an inline marker block. Only
//! bundle creation, the walk itself, and bundle writes are fatal.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::model::{CollectedFile, RunSummary};
use crate::core::paths::{dot_slash, make_relative, normalize_path, normalize_suffix};
use crate::core::reader::read_body;
use crate::core::render::format_block;
use crate::core::tokens::count_tokens;
use crate::core::util::format_bytes;

use super::sink::BundleSink;
use super::walker::{matched_files, WalkOptions};
use super::CollectError;

/// Suffix collected when none is given
pub const DEFAULT_SUFFIX: &str = ".go";

/// Bundle file written when none is given
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Options for a collect run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// File name suffix to collect (leading dot implied)
    pub suffix: String,
    /// Bundle path, resolved against root when relative
    pub output: PathBuf,
    /// Maximum directory depth from root
    pub max_depth: Option<usize>,
    /// Skip hidden files and directories
    pub skip_hidden: bool,
    /// Respect .gitignore and other ignore rules
    pub use_gitignore: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_depth: None,
            skip_hidden: false,
            use_gitignore: false,
        }
    }
}

/// Resolve the bundle path against root when it is relative
pub fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

/// Build traversal options for a collect-shaped run
///
/// The exclusion only takes effect when the bundle file already exists,
/// which is exactly when it could match its own suffix.
pub(crate) fn walk_options(root: &Path, opts: &CollectOptions) -> WalkOptions {
    WalkOptions {
        suffix: normalize_suffix(&opts.suffix),
        max_depth: opts.max_depth,
        skip_hidden: opts.skip_hidden,
        use_gitignore: opts.use_gitignore,
        exclude: resolve_output(root, &opts.output).canonicalize().ok(),
    }
}

/// Collect matched files under root into the bundle
///
/// The bundle is created (truncated) before the walk starts, so an
/// aborted run still leaves a fresh artifact rather than a stale one.
pub fn collect(root: &Path, opts: &CollectOptions) -> Result<RunSummary, CollectError> {
    let started = Instant::now();

    let output = resolve_output(root, &opts.output);
    let mut sink = BundleSink::create(&output)?;

    // Built after creation so the exclusion sees the bundle on disk
    let walk_opts = walk_options(root, opts);

    let mut summary = RunSummary::default();

    for path in matched_files(root, &walk_opts)? {
        let relative = make_relative(&path, root).unwrap_or_else(|| normalize_path(&path));
        let file = CollectedFile::new(dot_slash(&relative), read_body(&path));

        if file.body.is_unreadable() {
            summary.unreadable += 1;
        }

        let block = format_block(&file);
        sink.write_block(&block)?;
        summary.tokens += count_tokens(&block);
        summary.files += 1;
    }

    let (bytes, digest) = sink.finish()?;
    summary.bytes = bytes;
    summary.digest = digest;
    summary.elapsed_ms = started.elapsed().as_millis();

    Ok(summary)
}

/// Run the collect command
pub fn run_collect(root: &Path, opts: &CollectOptions, quiet: bool, verbose: bool) -> Result<()> {
    let summary = collect(root, opts).with_context(|| {
        format!(
            "failed to collect {} files under {}",
            normalize_suffix(&opts.suffix),
            root.display()
        )
    })?;

    if !quiet {
        let output = resolve_output(root, &opts.output);
        eprintln!(
            "📦 {} {} file(s) ({}) into {}",
            "Collected".green().bold(),
            summary.files,
            format_bytes(summary.bytes),
            output.display()
        );
        if summary.unreadable > 0 {
            eprintln!(
                "⚠️  {}",
                format!(
                    "{} file(s) could not be read; recorded inline",
                    summary.unreadable
                )
                .yellow()
            );
        }
        if verbose {
            eprintln!("   digest:  xxh3:{}", summary.digest);
            eprintln!("   tokens:  ~{}", summary.tokens);
            eprintln!("   elapsed: {} ms", summary.elapsed_ms);
        }
    }

    Ok(())
}
