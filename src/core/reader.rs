//! Per-file reading
//!
//! Reading a matched file never fails the run. The outcome is a value:
//! either the full text or the reason it could not be read. Content is
//! taken verbatim; there is no truncation and no lossy decoding, so a
//! bundled block always round-trips the file exactly.

use std::fs;
use std::path::Path;

use crate::core::model::FileBody;

/// Read one matched file as UTF-8 text
///
/// Any failure (open, read, decode) is captured as `Unreadable` with the
/// underlying error's message; the writer decides how that appears in the
/// bundle.
pub fn read_body(path: &Path) -> FileBody {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) => FileBody::Text(content),
            Err(e) => FileBody::Unreadable(e.to_string()),
        },
        Err(e) => FileBody::Unreadable(e.to_string()),
    }
}
