pub(crate) mod loader;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::agents::writer::AgentFile;
use crate::agents::Agent;
use crate::config::Config;
use crate::generator::{generate_rules_content, GeneratorOptions};
use crate::parser::parse_config;
use crate::types::NormalizedConfig;

/// Result of writing one agent's instruction file.
#[derive(Debug)]
pub struct AgentOutcome {
    pub agent: Agent,
    /// Registry path of the instruction file, relative to the project root.
    pub path: String,
    pub error: Option<String>,
}

impl AgentOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a full generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub outcomes: Vec<AgentOutcome>,
    pub active_rules: usize,
    pub total_rules: usize,
    pub plugins: Vec<String>,
}

impl GenerateReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &AgentOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AgentOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.succeeded())
    }
}

/// Rendered output for `preview`, never written to disk.
#[derive(Debug)]
pub struct Preview {
    pub active_rules: usize,
    pub total_rules: usize,
    pub plugins: Vec<String>,
    pub agent: Option<Agent>,
    /// Registry path shown when previewing a specific agent.
    pub path: Option<String>,
    pub header: Option<String>,
    pub content: String,
}

/// Configuration status reported by `check`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub config_found: bool,
    pub config_valid: bool,
    pub active_rules: usize,
    pub total_rules: usize,
    pub plugins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckStatus {
    pub fn ok(&self) -> bool {
        self.config_found && self.config_valid
    }
}

/// Write instruction files for `agents`, continuing past per-agent failures.
pub fn write_agents(
    root: &Path,
    config: &NormalizedConfig,
    agents: &[Agent],
    options: &GeneratorOptions,
    file_patterns: &[String],
) -> Vec<AgentOutcome> {
    agents
        .iter()
        .map(|&agent| {
            let file = AgentFile::new(agent, root, config, options, file_patterns);
            let path = agent.spec().path.to_string();
            match file.update() {
                Ok(()) => AgentOutcome {
                    agent,
                    path,
                    error: None,
                },
                Err(e) => AgentOutcome {
                    agent,
                    path,
                    error: Some(format!("{e:#}")),
                },
            }
        })
        .collect()
}

/// Load the project's ESLint configuration and regenerate guideline files
/// for the configured agents.
pub fn generate(root: &Path, config: &Config) -> Result<GenerateReport> {
    generate_for(root, config, &config.selected_agents())
}

fn generate_for(root: &Path, config: &Config, agents: &[Agent]) -> Result<GenerateReport> {
    let resolved = loader::load_resolved_config(root, config.target_file.as_deref())?;
    let parsed = parse_config(&resolved);

    debug!(
        active_rules = parsed.active_rules,
        agents = agents.len(),
        "writing guideline files"
    );
    let outcomes = write_agents(
        root,
        &parsed,
        agents,
        &config.generator_options(),
        &config.file_patterns,
    );

    Ok(GenerateReport {
        outcomes,
        active_rules: parsed.active_rules,
        total_rules: parsed.total_rules,
        plugins: parsed.plugins,
    })
}

/// First-time setup: record the agent selection in a starter config file,
/// then generate for it. An existing config file is left untouched.
pub fn init(root: &Path, config: &Config, agents: &[Agent]) -> Result<GenerateReport> {
    loader::require_eslint_config(root)?;

    let selection: Vec<Agent> = if agents.is_empty() {
        Agent::ALL.to_vec()
    } else {
        agents.to_vec()
    };

    let config_path = root.join(".pleaseai-lint.toml");
    if config_path.exists() {
        debug!(path = %config_path.display(), "keeping existing config file");
    } else {
        std::fs::write(&config_path, Config::starter_toml(&selection))
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        info!(path = %config_path.display(), "wrote starter config");
    }

    generate_for(root, config, &selection)
}

/// Render the guidelines without writing anything.
pub fn preview(root: &Path, config: &Config, agent: Option<Agent>) -> Result<Preview> {
    let resolved = loader::load_resolved_config(root, config.target_file.as_deref())?;
    let parsed = parse_config(&resolved);
    let content = generate_rules_content(&parsed, &config.generator_options());

    let (path, header) = match agent {
        Some(agent) => {
            let spec = agent.spec();
            (
                Some(spec.path.to_string()),
                spec.header.render(&config.file_patterns),
            )
        }
        None => (None, None),
    };

    Ok(Preview {
        active_rules: parsed.active_rules,
        total_rules: parsed.total_rules,
        plugins: parsed.plugins,
        agent,
        path,
        header,
        content,
    })
}

/// Report whether the project's ESLint configuration can be resolved.
///
/// Never fails; problems are folded into the returned status.
pub fn check(root: &Path, target_file: Option<&str>) -> CheckStatus {
    let config_found = loader::has_eslint_config(root);

    match loader::load_resolved_config(root, target_file) {
        Ok(resolved) => {
            let parsed = parse_config(&resolved);
            CheckStatus {
                config_found,
                config_valid: true,
                active_rules: parsed.active_rules,
                total_rules: parsed.total_rules,
                plugins: parsed.plugins,
                error: None,
            }
        }
        Err(e) => CheckStatus {
            config_found,
            config_valid: false,
            active_rules: 0,
            total_rules: 0,
            plugins: Vec::new(),
            error: Some(format!("{e:#}")),
        },
    }
}
