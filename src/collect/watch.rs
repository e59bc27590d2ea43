//! Watch - re-run collect when matched files change
//!
//! Shells out to watchexec rather than embedding a notify loop. The
//! bundle file is excluded from the watch so a finished run does not
//! trigger the next one. Only available with the "watch" feature.

use anyhow::{bail, Result};
use std::path::Path;
use std::process::Command;

use super::collector::CollectOptions;
use crate::core::paths::normalize_suffix;

/// Check if a command is available in PATH
fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Build the collect invocation the watcher re-runs on every change
///
/// Every matching option is forwarded, so the re-run collects exactly
/// what a direct `srcpack collect` with the same flags would.
fn collect_command(opts: &CollectOptions) -> String {
    let mut cmd = format!(
        "srcpack collect --ext {} --output {}",
        normalize_suffix(&opts.suffix),
        opts.output.display()
    );
    if let Some(depth) = opts.max_depth {
        cmd.push_str(&format!(" --max-depth {}", depth));
    }
    if opts.skip_hidden {
        cmd.push_str(" --skip-hidden");
    }
    if opts.use_gitignore {
        cmd.push_str(" --gitignore");
    }
    cmd
}

/// Run the watch command
pub fn run_watch(root: &Path, opts: &CollectOptions) -> Result<()> {
    if !command_exists("watchexec") {
        bail!("watchexec is not installed. Please install it: cargo install watchexec-cli");
    }

    let suffix = normalize_suffix(&opts.suffix);
    let collect_cmd = collect_command(opts);

    let mut command = Command::new("watchexec");
    command
        .current_dir(root)
        .arg("--exts")
        .arg(suffix.trim_start_matches('.'))
        .arg("--ignore")
        .arg(opts.output.display().to_string())
        .arg("--ignore")
        .arg(".git/")
        .arg("--ignore")
        .arg("target/")
        .arg("--")
        .arg("sh")
        .arg("-c")
        .arg(&collect_cmd);

    let status = command.status()?;

    if !status.success() {
        bail!("watchexec exited with error");
    }

    Ok(())
}
