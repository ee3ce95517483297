//! Resolves a project's effective ESLint configuration.
//!
//! ESLint owns the flat-config resolution logic (extends chains, plugin
//! presets, overrides), so instead of reimplementing it we shell out to
//! `npx eslint --print-config` and parse the resolved JSON it prints.

use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, bail, Result};
use tracing::debug;

use crate::parser::types::ResolvedEslintConfig;

#[cfg(windows)]
const NPX: &str = "npx.cmd";
#[cfg(not(windows))]
const NPX: &str = "npx";

/// Flat config files ESLint recognizes.
const CONFIG_FILES: [&str; 3] = ["eslint.config.js", "eslint.config.mjs", "eslint.config.cjs"];

/// Files tried as the `--print-config` target when none is given.
const TARGET_CANDIDATES: [&str; 8] = [
    "src/index.ts",
    "src/index.js",
    "src/main.ts",
    "src/main.js",
    "index.ts",
    "index.js",
    "src/App.tsx",
    "src/App.jsx",
];

/// Whether the project carries an ESLint flat config.
pub fn has_eslint_config(root: &Path) -> bool {
    CONFIG_FILES.iter().any(|file| root.join(file).exists())
}

/// Fail with the standard remediation hint when no flat config exists.
pub fn require_eslint_config(root: &Path) -> Result<()> {
    if !has_eslint_config(root) {
        bail!(
            "No ESLint flat config found. Expected eslint.config.js, \
             eslint.config.mjs, or eslint.config.cjs"
        );
    }
    Ok(())
}

/// First target candidate that exists under `root`.
pub fn find_target_file(root: &Path) -> Option<&'static str> {
    TARGET_CANDIDATES
        .into_iter()
        .find(|candidate| root.join(candidate).exists())
}

/// Load the resolved configuration for `target_file` (auto-detected when
/// `None`) by running `npx eslint --print-config` in `root`.
pub fn load_resolved_config(
    root: &Path,
    target_file: Option<&str>,
) -> Result<ResolvedEslintConfig> {
    require_eslint_config(root)?;

    let target = match target_file {
        Some(file) => file,
        None => find_target_file(root).ok_or_else(|| {
            anyhow!(
                "No target file found for --print-config. Please specify a \
                 file with --file option or create src/index.ts"
            )
        })?,
    };

    debug!(target, root = %root.display(), "running eslint --print-config");

    let output = Command::new(NPX)
        .args(["eslint", "--print-config", target])
        .current_dir(root)
        .output()
        .map_err(|e| anyhow!("Failed to run ESLint: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            "Unknown error".into()
        };
        bail!("ESLint --print-config failed: {message}");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).map_err(|_| {
        anyhow!(
            "Failed to parse ESLint config output. Raw output: {preview}",
            preview = truncate(&stdout, 200)
        )
    })
}

/// First `limit` characters of `text`, for error previews.
fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
