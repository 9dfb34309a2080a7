//! External editor hand-off for capturing free-form task input.
//!
//! The caller is responsible for suspending the TUI first: the editor
//! runs attached to the real terminal.

use std::env;
use std::fs;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tempfile::Builder;

const FALLBACK_EDITOR: &str = "vi";

/// Picks the editor program: explicit override first, then `$VISUAL`,
/// then `$EDITOR`, then `vi`. Blank candidates are skipped.
#[must_use]
pub fn resolve_editor(
    override_cmd: Option<&str>,
    visual: Option<&str>,
    editor: Option<&str>,
) -> String {
    [override_cmd, visual, editor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Launches the editor on a fresh scratch file and returns whatever
/// was written to it. The scratch file is removed when the guard
/// drops, whether the editor succeeded or not.
pub fn capture_input(override_cmd: Option<&str>) -> Result<String> {
    let visual = env::var("VISUAL").ok();
    let editor_var = env::var("EDITOR").ok();
    let editor = resolve_editor(override_cmd, visual.as_deref(), editor_var.as_deref());

    let scratch = Builder::new()
        .prefix("task")
        .suffix(".txt")
        .tempfile()
        .context("creating scratch file")?;

    let status = Command::new(&editor)
        .arg(scratch.path())
        .status()
        .with_context(|| format!("launching editor {editor:?}"))?;
    if !status.success() {
        bail!("editor {editor:?} exited with {status}");
    }

    fs::read_to_string(scratch.path()).context("reading scratch file")
}
