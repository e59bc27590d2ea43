//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::collect::collector::{CollectOptions, DEFAULT_OUTPUT, DEFAULT_SUFFIX};
use crate::core::render::{OutputFormat, RenderConfig};

/// srcpack - bundle matched source files into a single AI-context artifact.
#[derive(Parser, Debug)]
#[command(name = "srcpack")]
#[command(
    author,
    version,
    about,
    long_about = r#"srcpack walks a directory tree and bundles every file whose name ends
with a suffix (default: .go) into one artifact (default: output.txt).

Each bundle block is the file's ./-prefixed relative path on its own line,
the file's verbatim content (or an inline read-error marker when the file
cannot be read), and a four-newline separator. Blocks appear in sorted
traversal order, so the same tree always produces the same bundle.

Running srcpack with no subcommand is equivalent to `srcpack collect`
with all defaults.

Output formats (scan/stats listings):
- jsonl: one JSON object per line (best for piping into tools/LLMs)
- json: a single JSON array
- text: plain paths, one per line

Examples:
    srcpack
    srcpack collect --ext .rs --output bundle.txt
    srcpack scan --gitignore
    srcpack stats --top 5
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
All paths emitted in the bundle and in listings are relative to this root,\n\
and a relative --output is resolved against it."
    )]
    pub root: PathBuf,

    /// Output format for listings (jsonl/json/text).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for scan and stats listings.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- text\n\n\
The bundle artifact itself always uses the block format and is not affected."
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress the collect summary on stderr. Note: machine-readable listings\n\
are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print extra run details (digest, token estimate, elapsed time) after a\n\
collect run."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL listing output with indentation for human\n\
readability. Has no effect on the text format or on the bundle."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Matching options shared by every command that enumerates files.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// File name suffix to match (leading dot implied).
    #[arg(
        long,
        default_value = DEFAULT_SUFFIX,
        value_name = "SUFFIX",
        long_help = "File name suffix to match. A leading dot is implied, so `--ext go` and\n\
`--ext .go` are equivalent.\n\n\
Matching is against the whole file name, not the extension: `--ext .pb.go`\n\
matches generated protobuf files only."
    )]
    pub ext: String,

    /// Bundle path, resolved against ROOT when relative.
    #[arg(
        long,
        default_value = DEFAULT_OUTPUT,
        value_name = "PATH",
        long_help = "Where collect writes the bundle. Relative paths are resolved against ROOT.\n\n\
The bundle file is always excluded from matching, so a bundle whose name\n\
matches the suffix never swallows itself on the next run. scan and stats\n\
accept this flag for the same reason: to know which file to leave out."
    )]
    pub output: PathBuf,

    /// Maximum directory depth from ROOT.
    #[arg(
        long,
        value_name = "N",
        long_help = "Maximum directory depth from ROOT. Depth 1 is ROOT's direct children.\n\n\
If omitted, the walk traverses all depths."
    )]
    pub max_depth: Option<usize>,

    /// Skip hidden files and directories (dotfiles).
    #[arg(
        long,
        long_help = "Skip hidden files and directories (dotfiles).\n\n\
By default every entry on disk is visited, including hidden ones."
    )]
    pub skip_hidden: bool,

    /// Respect .gitignore and other ignore rules.
    #[arg(
        long,
        long_help = "Respect ignore files (.gitignore, .ignore, global ignores), even when the\n\
tree is not a git repository.\n\n\
By default ignore rules are not consulted and every file is a candidate."
    )]
    pub gitignore: bool,
}

impl MatchArgs {
    fn to_options(&self) -> CollectOptions {
        CollectOptions {
            suffix: self.ext.clone(),
            output: self.output.clone(),
            max_depth: self.max_depth,
            skip_hidden: self.skip_hidden,
            use_gitignore: self.gitignore,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle matched files into the output artifact.
    #[command(
        long_about = "Walk ROOT, match files by suffix, and write one bundle block per file to\n\
the output artifact (created fresh on every run).\n\n\
Files that cannot be read are recorded inline as an error marker block and\n\
never abort the run. A summary is printed to stderr unless --quiet is set.\n\n\
Examples:\n\
  srcpack collect\n\
  srcpack collect --ext .rs --output bundle.txt\n\
  srcpack collect --skip-hidden --gitignore\n"
    )]
    Collect {
        #[command(flatten)]
        args: MatchArgs,
    },

    /// List what collect would include, without writing anything.
    #[command(
        long_about = "Enumerate the files a collect run with the same options would bundle and\n\
emit one record per file (path, size, mtime) in bundle order.\n\n\
Use this as a dry run before collecting, or to feed file lists into other\n\
tools.\n\n\
Examples:\n\
  srcpack scan\n\
  srcpack scan --ext .rs --format text\n"
    )]
    Scan {
        #[command(flatten)]
        args: MatchArgs,
    },

    /// Measure matched files (bytes, lines, token estimate).
    #[command(
        long_about = "Read the files a collect run would bundle and report per-file and total\n\
bytes, lines, and estimated tokens.\n\n\
Use this to judge whether a bundle will fit a model's context window before\n\
writing it.\n\n\
Examples:\n\
  srcpack stats\n\
  srcpack stats --top 5 --format json\n"
    )]
    Stats {
        #[command(flatten)]
        args: MatchArgs,

        /// Number of largest files to list.
        #[arg(long, default_value = "10", value_name = "N")]
        top: usize,
    },

    /// Re-run collect when matched files change (requires 'watch' feature).
    #[cfg(feature = "watch")]
    #[command(
        long_about = "Watch ROOT with watchexec and re-run collect whenever a matched file\n\
changes. The bundle file itself is excluded from the watch.\n\n\
Example:\n\
  srcpack watch --ext .go\n"
    )]
    Watch {
        #[command(flatten)]
        args: MatchArgs,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        // Bare invocation: collect with all defaults
        None => crate::collect::collector::run_collect(
            &root,
            &CollectOptions::default(),
            cli.quiet,
            cli.verbose,
        ),

        Some(Commands::Collect { args }) => crate::collect::collector::run_collect(
            &root,
            &args.to_options(),
            cli.quiet,
            cli.verbose,
        ),

        Some(Commands::Scan { args }) => {
            crate::collect::scan::run_scan(&root, &args.to_options(), render_config)
        }

        Some(Commands::Stats { args, top }) => {
            crate::collect::stats::run_stats(&root, &args.to_options(), top, render_config)
        }

        #[cfg(feature = "watch")]
        Some(Commands::Watch { args }) => {
            crate::collect::watch::run_watch(&root, &args.to_options())
        }
    }
}
