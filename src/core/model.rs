//! Bundle data model
//!
//! Every matched file is represented once, as a normalized relative path
//! plus a body that is either the file's text or the reason it could not
//! be read. The writer decides how each variant appears in the bundle;
//! traversal code never formats anything.

use serde::{Deserialize, Serialize};

/// Outcome of reading one matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    /// Full content, decoded as UTF-8, verbatim
    Text(String),
    /// The file could not be read or decoded; carries the reason
    Unreadable(String),
}

impl FileBody {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileBody::Unreadable(_))
    }
}

/// One matched file, ready to be written into the bundle
#[derive(Debug, Clone)]
pub struct CollectedFile {
    /// Path relative to root, '/'-separated, always `./`-prefixed
    pub path: String,
    pub body: FileBody,
}

impl CollectedFile {
    pub fn new(path: impl Into<String>, body: FileBody) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }
}

/// A matched file as listed by `scan` (no content, metadata only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Path relative to root, '/'-separated, always `./`-prefixed
    pub path: String,

    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Modification time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_ms: Option<i64>,
}

impl Record {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size: None,
            mtime_ms: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mtime_ms(mut self, mtime_ms: i64) -> Self {
        self.mtime_ms = Some(mtime_ms);
        self
    }
}

/// Totals accumulated over one collect run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Matched files written to the bundle (including error blocks)
    pub files: usize,
    /// How many of those were unreadable
    pub unreadable: usize,
    /// Bytes written to the bundle
    pub bytes: u64,
    /// Estimated tokens of the whole bundle
    pub tokens: usize,
    /// XXH3 digest of the bundle content (hex)
    pub digest: String,
    /// Wall-clock duration of the run
    pub elapsed_ms: u128,
}
