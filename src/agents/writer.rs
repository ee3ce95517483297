//! Writes guideline files into a project, honoring each agent's strategy.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::agents::{Agent, MARKER_END, MARKER_START};
use crate::generator::{generate_rules_content, GeneratorOptions};
use crate::types::NormalizedConfig;

/// A single agent's instruction file, rendered and ready to write.
pub struct AgentFile {
    agent: Agent,
    path: PathBuf,
    header: Option<String>,
    rules_content: String,
}

impl AgentFile {
    /// Prepare the instruction file for `agent` under the project `root`.
    pub fn new(
        agent: Agent,
        root: &Path,
        config: &NormalizedConfig,
        options: &GeneratorOptions,
        file_patterns: &[String],
    ) -> AgentFile {
        let spec = agent.spec();
        AgentFile {
            agent,
            path: root.join(spec.path.trim_start_matches("./")),
            header: spec.header.render(file_patterns),
            rules_content: generate_rules_content(config, options),
        }
    }

    /// Destination path of the instruction file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the destination file already exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file from scratch, replacing whatever is there.
    pub fn create(&self) -> Result<()> {
        self.ensure_parent_dir()?;
        self.write(&self.full_contents())
    }

    /// Write the guidelines, splicing into the marker section for append-mode
    /// agents and overwriting for the rest.
    pub fn update(&self) -> Result<()> {
        self.ensure_parent_dir()?;

        if !self.agent.spec().append_mode {
            return self.write(&self.full_contents());
        }

        if !self.exists() {
            let block = format!(
                "{MARKER_START}\n{content}\n{MARKER_END}",
                content = self.rules_content
            );
            return self.write(&block);
        }

        let existing = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        self.write(&splice(&existing, &self.rules_content))
    }

    /// Contents for a full overwrite, header included when the agent has one.
    fn full_contents(&self) -> String {
        match &self.header {
            Some(header) => format!("{header}\n\n{content}", content = self.rules_content),
            None => self.rules_content.clone(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        Ok(())
    }

    fn write(&self, contents: &str) -> Result<()> {
        debug!(agent = %self.agent, path = %self.path.display(), "writing agent file");
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Replace the marker-delimited section of `existing` with fresh guidelines.
///
/// Surrounding bytes are preserved exactly. When the markers are missing or
/// out of order, a fresh section is appended after the existing content.
fn splice(existing: &str, rules_content: &str) -> String {
    let block = format!("{MARKER_START}\n{rules_content}\n{MARKER_END}");

    if let Some(start) = existing.find(MARKER_START) {
        if let Some(end) = existing.find(MARKER_END) {
            if end > start {
                let before = &existing[..start];
                let after = &existing[end + MARKER_END.len()..];
                return format!("{before}{block}{after}");
            }
        }
    }

    format!("{existing}\n\n{block}")
}
