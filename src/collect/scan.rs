//! Scan - list what a collect run would include, without writing anything
//!
//! Emits one record per matched file with size and mtime metadata, in the
//! same deterministic order collect would bundle them.

use anyhow::Result;
use std::path::Path;

use crate::core::model::Record;
use crate::core::paths::{dot_slash, make_relative, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{get_file_size, get_mtime_ms};

use super::collector::{walk_options, CollectOptions};
use super::walker::matched_files;
use super::CollectError;

/// Enumerate matched files as records
pub fn scan_records(root: &Path, opts: &CollectOptions) -> Result<Vec<Record>, CollectError> {
    let walk_opts = walk_options(root, opts);

    let mut records = Vec::new();
    for path in matched_files(root, &walk_opts)? {
        let relative = make_relative(&path, root).unwrap_or_else(|| normalize_path(&path));
        let mut record = Record::new(dot_slash(&relative));

        if let Ok(size) = get_file_size(&path) {
            record = record.with_size(size);
        }
        if let Ok(mtime) = get_mtime_ms(&path) {
            record = record.with_mtime_ms(mtime);
        }

        records.push(record);
    }

    Ok(records)
}

/// Run the scan command
pub fn run_scan(root: &Path, opts: &CollectOptions, config: RenderConfig) -> Result<()> {
    let records = scan_records(root, opts)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&records));

    Ok(())
}
