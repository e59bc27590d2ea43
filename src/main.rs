//! srcpack - Bundle source files into a single AI-context artifact
//!
//! srcpack provides:
//! - Recursive suffix-matched collection into one bundle file
//! - Inline read-error markers so a bad file never aborts a run
//! - Deterministic, sorted traversal for reproducible bundles
//! - Dry-run scanning and byte/line/token statistics

use anyhow::Result;
use clap::Parser;

mod cli;
mod collect;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
