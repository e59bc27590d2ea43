//! Bundle sink
//!
//! Owns the output file handle for the duration of a run. Blocks stream
//! through a BufWriter while an xxh3 digest and a byte count accumulate,
//! so the summary can report what was written without re-reading the
//! bundle. Dropping the sink closes the file; finish() flushes first and
//! hands back the totals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::Xxh3;

use super::CollectError;

/// Streaming writer for the bundle artifact
pub struct BundleSink {
    path: PathBuf,
    writer: BufWriter<File>,
    hasher: Xxh3,
    bytes: u64,
}

impl BundleSink {
    /// Create the bundle file, truncating any previous run's artifact
    pub fn create(path: &Path) -> Result<Self, CollectError> {
        let file = File::create(path).map_err(|source| CollectError::CreateBundle {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            hasher: Xxh3::new(),
            bytes: 0,
        })
    }

    /// Path of the bundle being written
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one formatted block
    pub fn write_block(&mut self, block: &str) -> Result<(), CollectError> {
        self.writer.write_all(block.as_bytes())?;
        self.hasher.update(block.as_bytes());
        self.bytes += block.len() as u64;
        Ok(())
    }

    /// Flush and return (bytes written, content digest)
    pub fn finish(mut self) -> Result<(u64, String), CollectError> {
        self.writer.flush()?;
        Ok((self.bytes, format!("{:016x}", self.hasher.digest())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use xxhash_rust::xxh3::xxh3_64;

    #[test]
    fn test_sink_writes_blocks_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");

        let mut sink = BundleSink::create(&path).unwrap();
        sink.write_block("./a.go\npackage main\n\n\n\n").unwrap();
        sink.write_block("./pkg/c.go\npackage pkg\n\n\n\n").unwrap();
        let (bytes, _) = sink.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "./a.go\npackage main\n\n\n\n./pkg/c.go\npackage pkg\n\n\n\n");
        assert_eq!(bytes, content.len() as u64);
    }

    #[test]
    fn test_sink_truncates_previous_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");
        fs::write(&path, "stale content from an earlier run").unwrap();

        let sink = BundleSink::create(&path).unwrap();
        let (bytes, _) = sink.finish().unwrap();

        assert_eq!(bytes, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_sink_digest_matches_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");

        let mut sink = BundleSink::create(&path).unwrap();
        sink.write_block("./a.go\n").unwrap();
        sink.write_block("package main\n\n\n\n").unwrap();
        let (_, digest) = sink.finish().unwrap();

        let expected = format!("{:016x}", xxh3_64(b"./a.go\npackage main\n\n\n\n"));
        assert_eq!(digest, expected);
    }

    #[test]
    fn test_sink_multibyte_block() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");

        let block = "./bad.go\n读取文件时出错: oops\n\n\n\n";
        let mut sink = BundleSink::create(&path).unwrap();
        sink.write_block(block).unwrap();
        let (bytes, _) = sink.finish().unwrap();

        // byte count, not char count
        assert_eq!(bytes, block.len() as u64);
        assert_eq!(fs::read_to_string(&path).unwrap(), block);
    }

    #[test]
    fn test_sink_create_fails_for_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no_such_dir").join("output.txt");

        // the sink has no Debug impl (live handle + hasher), so no unwrap_err
        match BundleSink::create(&path) {
            Ok(_) => panic!("expected create to fail"),
            Err(CollectError::CreateBundle { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sink_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");
        let sink = BundleSink::create(&path).unwrap();
        assert_eq!(sink.path(), path);
    }
}
