//! Statistics - measure matched files before bundling them
//!
//! Reads each matched file the same way collect would and reports bytes,
//! lines, and a token estimate per file plus run totals. Useful for
//! judging whether a bundle will fit a model's context window.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::model::FileBody;
use crate::core::paths::{dot_slash, make_relative, normalize_path};
use crate::core::reader::read_body;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::tokens::count_tokens;
use crate::core::util::format_bytes;

use super::collector::{walk_options, CollectOptions};
use super::walker::matched_files;
use super::CollectError;

/// Measurements for a single readable file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStats {
    /// `./`-prefixed path relative to root
    pub path: String,
    /// Content bytes
    pub bytes: u64,
    /// Line count
    pub lines: usize,
    /// Estimated token count
    pub tokens: usize,
}

/// Totals across all matched files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleStats {
    /// All matched files, readable or not
    pub files: usize,
    /// Matched files that could not be read
    pub unreadable: usize,
    /// Total content bytes
    pub total_bytes: u64,
    /// Total lines
    pub total_lines: usize,
    /// Estimated total tokens
    pub total_tokens: usize,
    /// Largest files by content bytes
    pub largest: Vec<FileStats>,
}

/// Measure matched files under root
pub fn bundle_stats(
    root: &Path,
    opts: &CollectOptions,
    top: usize,
) -> Result<BundleStats, CollectError> {
    let walk_opts = walk_options(root, opts);

    let mut stats = BundleStats::default();
    let mut per_file = Vec::new();

    for path in matched_files(root, &walk_opts)? {
        stats.files += 1;

        let content = match read_body(&path) {
            FileBody::Text(content) => content,
            FileBody::Unreadable(_) => {
                stats.unreadable += 1;
                continue;
            }
        };

        let relative = make_relative(&path, root).unwrap_or_else(|| normalize_path(&path));
        let file_stats = FileStats {
            path: dot_slash(&relative),
            bytes: content.len() as u64,
            lines: content.lines().count(),
            tokens: count_tokens(&content),
        };

        stats.total_bytes += file_stats.bytes;
        stats.total_lines += file_stats.lines;
        stats.total_tokens += file_stats.tokens;
        per_file.push(file_stats);
    }

    per_file.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    stats.largest = per_file.into_iter().take(top).collect();

    Ok(stats)
}

/// Run the stats command
pub fn run_stats(
    root: &Path,
    opts: &CollectOptions,
    top: usize,
    config: RenderConfig,
) -> Result<()> {
    let stats = bundle_stats(root, opts, top)?;

    match config.format {
        OutputFormat::Json => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&stats)?
            } else {
                serde_json::to_string(&stats)?
            };
            println!("{}", json);
        }
        OutputFormat::Jsonl => {
            for file in &stats.largest {
                let line = if config.pretty {
                    serde_json::to_string_pretty(file)?
                } else {
                    serde_json::to_string(file)?
                };
                println!("{}", line);
            }
        }
        OutputFormat::Text => {
            println!("{}", "📊 Bundle Statistics".bold());
            println!("  Files:       {}", stats.files);
            if stats.unreadable > 0 {
                println!(
                    "  Unreadable:  {}",
                    stats.unreadable.to_string().yellow()
                );
            }
            println!("  Bytes:       {}", format_bytes(stats.total_bytes));
            println!("  Lines:       {}", stats.total_lines);
            println!("  Est. Tokens: {}", stats.total_tokens);

            if !stats.largest.is_empty() {
                println!();
                println!("{}", format!("📄 Top {} Files", stats.largest.len()).bold());
                for f in &stats.largest {
                    println!(
                        "  {:40} {:>10}  {:>6} lines  ~{:>6} tokens",
                        f.path,
                        format_bytes(f.bytes),
                        f.lines,
                        f.tokens
                    );
                }
            }
        }
    }

    Ok(())
}
