//! Golden tests for srcpack
//!
//! These tests pin the bundle byte format and listing output against a
//! committed fixture tree. They ensure:
//! - Bundle layout stability (path line, content, four-newline separator)
//! - Deterministic ordering across runs
//! - Consistent scan/stats output structure

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample tree
fn sample_tree() -> PathBuf {
    fixtures_dir().join("sample_tree")
}

/// Create a command for running the srcpack binary
fn srcpack_cmd() -> Command {
    Command::cargo_bin("srcpack").expect("Failed to find srcpack binary")
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

/// Normalize a record by removing unstable fields (mtime)
fn normalize_record(mut record: Value) -> Value {
    if let Some(obj) = record.as_object_mut() {
        obj.remove("mtime_ms");
    }
    record
}

fn normalize_records(records: Vec<Value>) -> Vec<Value> {
    records.into_iter().map(normalize_record).collect()
}

/// The exact bundle the sample tree must produce
const EXPECTED_BUNDLE: &str = concat!(
    "./a.go\n",
    "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hello\")\n}\n",
    "\n\n\n\n",
    "./empty.go\n",
    "\n\n\n\n",
    "./pkg/c.go\n",
    "package pkg\n\nvar Version = \"1.0\"\n",
    "\n\n\n\n",
);

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Bundle Tests ====================

    #[test]
    fn golden_collect_bundle_bytes() {
        let out = tempdir().unwrap();
        let bundle_path = out.path().join("bundle.txt");

        srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("collect")
            .arg("--output")
            .arg(&bundle_path)
            .assert()
            .success();

        let bundle = std::fs::read_to_string(&bundle_path).expect("bundle written");
        assert_eq!(bundle, EXPECTED_BUNDLE, "bundle bytes must be stable");
    }

    #[test]
    fn golden_collect_is_deterministic() {
        let out = tempdir().unwrap();
        let first = out.path().join("first.txt");
        let second = out.path().join("second.txt");

        for path in [&first, &second] {
            srcpack_cmd()
                .arg("--root")
                .arg(sample_tree())
                .arg("collect")
                .arg("--output")
                .arg(path)
                .assert()
                .success();
        }

        let bytes_first = std::fs::read(&first).unwrap();
        let bytes_second = std::fs::read(&second).unwrap();
        assert_eq!(bytes_first, bytes_second, "runs must be byte-identical");
    }

    #[test]
    fn golden_block_separator_is_four_newlines() {
        // Between the end of a.go's content and the next path line there
        // must be exactly four newlines (plus the content's own trailing
        // newline), never more, never fewer.
        assert!(EXPECTED_BUNDLE.contains("}\n\n\n\n\n./empty.go\n"));
        assert!(!EXPECTED_BUNDLE.contains("\n\n\n\n\n\n./empty.go"));
    }

    // ==================== Scan Tests ====================

    #[test]
    fn golden_scan_structure() {
        let output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("scan")
            .output()
            .expect("failed to execute");

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records = parse_jsonl(&stdout);

        assert_eq!(records.len(), 3, "Expected 3 matched files");

        let paths: Vec<&str> = records
            .iter()
            .filter_map(|v| v.get("path").and_then(|p| p.as_str()))
            .collect();

        assert_eq!(
            paths,
            vec!["./a.go", "./empty.go", "./pkg/c.go"],
            "Files should be in sorted traversal order"
        );

        let sizes: Vec<u64> = records
            .iter()
            .filter_map(|v| v.get("size").and_then(|s| s.as_u64()))
            .collect();
        assert_eq!(sizes, vec![66, 0, 33]);

        for record in &records {
            assert!(record.get("mtime_ms").is_some(), "mtime_ms must exist");
        }
    }

    #[test]
    fn golden_scan_jsonl_vs_json_equivalence() {
        let jsonl_output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("--format")
            .arg("jsonl")
            .arg("scan")
            .output()
            .expect("failed");

        let jsonl_stdout = String::from_utf8_lossy(&jsonl_output.stdout);
        let jsonl_records = normalize_records(parse_jsonl(&jsonl_stdout));

        let json_output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("--format")
            .arg("json")
            .arg("scan")
            .output()
            .expect("failed");

        let json_stdout = String::from_utf8_lossy(&json_output.stdout);
        let json_records: Vec<Value> =
            serde_json::from_str(&json_stdout).expect("valid JSON array");
        let json_records = normalize_records(json_records);

        assert_eq!(jsonl_records, json_records);
    }

    #[test]
    fn golden_scan_text_format() {
        let output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("--format")
            .arg("text")
            .arg("scan")
            .output()
            .expect("failed to execute");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim_end(), "./a.go\n./empty.go\n./pkg/c.go");
    }

    #[test]
    fn golden_scan_output_is_deterministic() {
        let run1 = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("scan")
            .output()
            .expect("failed");

        let run2 = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("scan")
            .output()
            .expect("failed");

        let records1 = normalize_records(parse_jsonl(&String::from_utf8_lossy(&run1.stdout)));
        let records2 = normalize_records(parse_jsonl(&String::from_utf8_lossy(&run2.stdout)));

        assert_eq!(records1, records2, "Output should be deterministic");
    }

    // ==================== Stats Tests ====================

    #[test]
    fn golden_stats_totals() {
        let output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("--format")
            .arg("json")
            .arg("stats")
            .output()
            .expect("failed to execute");

        let stats: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");

        assert_eq!(stats.get("files").and_then(|v| v.as_u64()), Some(3));
        assert_eq!(stats.get("unreadable").and_then(|v| v.as_u64()), Some(0));
        assert_eq!(stats.get("total_bytes").and_then(|v| v.as_u64()), Some(99));
        assert_eq!(stats.get("total_lines").and_then(|v| v.as_u64()), Some(10));

        // token counts come from the tokenizer; only pin that they exist
        assert!(stats.get("total_tokens").and_then(|v| v.as_u64()).unwrap() > 0);
    }

    #[test]
    fn golden_stats_largest_ordering() {
        let output = srcpack_cmd()
            .arg("--root")
            .arg(sample_tree())
            .arg("--format")
            .arg("json")
            .arg("stats")
            .output()
            .expect("failed to execute");

        let stats: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        let largest = stats.get("largest").and_then(|v| v.as_array()).unwrap();

        let paths: Vec<&str> = largest
            .iter()
            .filter_map(|v| v.get("path").and_then(|p| p.as_str()))
            .collect();

        assert_eq!(paths, vec!["./a.go", "./pkg/c.go", "./empty.go"]);
    }
}
