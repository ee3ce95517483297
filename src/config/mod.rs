use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::agents::Agent;
use crate::generator::GeneratorOptions;

/// Project-level settings, read from `.pleaseai-lint.toml` when present.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Agents to generate for. Empty means every supported agent.
    pub agents: Vec<Agent>,
    /// File handed to `eslint --print-config` instead of the auto-detected one.
    pub target_file: Option<String>,
    /// File patterns for agents with pattern-scoped front matter.
    pub file_patterns: Vec<String>,
    pub include_guidance: bool,
    pub include_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            target_file: None,
            file_patterns: Vec::new(),
            include_guidance: true,
            include_fallback: true,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(".pleaseai-lint.toml");
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    /// Agents to generate for, with the empty list meaning all of them.
    pub fn selected_agents(&self) -> Vec<Agent> {
        if self.agents.is_empty() {
            Agent::ALL.to_vec()
        } else {
            self.agents.clone()
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            include_guidance: self.include_guidance,
            include_fallback: self.include_fallback,
        }
    }

    /// Starter config written by `init`, seeded with the chosen agents.
    pub fn starter_toml(agents: &[Agent]) -> String {
        let agent_list = agents
            .iter()
            .map(|agent| format!("\"{agent}\""))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# pleaseai-lint configuration

# AI tools to generate guideline files for.
# Leave empty to generate for every supported tool.
agents = [{agent_list}]

# File passed to `eslint --print-config`. Defaults to auto-detection
# (src/index.ts, src/index.js, src/main.ts, ...).
# target_file = "src/index.ts"

# File patterns for tools with pattern-scoped front matter.
# file_patterns = ["src/**/*.ts", "src/**/*.tsx"]

# Include Do/Don't guidance lines under each guideline.
include_guidance = true

# Include synthesized guidelines for rules without a curated mapping.
include_fallback = true
"#
        )
    }
}
