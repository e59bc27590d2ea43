//! Renderer module
//!
//! Two concerns live here: the bundle's on-disk block format (owned by the
//! writer so traversal code never formats anything), and rendering of scan
//! records to the jsonl/json/text listing formats.

use crate::core::model::{CollectedFile, FileBody, Record};

/// Marker written in place of content when a matched file cannot be read
pub const READ_ERROR_PREFIX: &str = "读取文件时出错: ";

/// Separator appended after every content/error block
pub const BLOCK_SEPARATOR: &str = "\n\n\n\n";

/// Format one matched file as a bundle block
///
/// Exactly one path line, the verbatim content or the error marker, and
/// the four-newline separator. Nothing is appended to the content itself.
pub fn format_block(file: &CollectedFile) -> String {
    let mut block = String::new();
    block.push_str(&file.path);
    block.push('\n');
    match &file.body {
        FileBody::Text(content) => block.push_str(content),
        FileBody::Unreadable(reason) => {
            block.push_str(READ_ERROR_PREFIX);
            block.push_str(reason);
        }
    }
    block.push_str(BLOCK_SEPARATOR);
    block
}

/// Output format for listing commands (never for the bundle itself)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for scan records
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render records to a string
    pub fn render(&self, records: &[Record]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(records),
            OutputFormat::Json => self.render_json(records),
            OutputFormat::Text => self.render_text(records),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, records: &[Record]) -> String {
        records
            .iter()
            .filter_map(|record| {
                if self.config.pretty {
                    serde_json::to_string_pretty(record).ok()
                } else {
                    serde_json::to_string(record).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, records: &[Record]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as plain text (one path per line, for piping)
    fn render_text(&self, records: &[Record]) -> String {
        records
            .iter()
            .map(|record| record.path.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
