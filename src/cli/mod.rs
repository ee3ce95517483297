pub mod report;

use clap::{Parser, Subcommand, ValueEnum};

use crate::agents::Agent;

#[derive(Parser, Debug)]
#[command(
    name = "pleaseai-lint",
    version,
    about = "Generate AI assistant guideline files from your ESLint configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up guideline files and a starter .pleaseai-lint.toml
    Init {
        /// File passed to `eslint --print-config` (defaults to auto-detection)
        #[arg(short, long)]
        file: Option<String>,

        /// Agents to generate for (comma-separated, defaults to all)
        #[arg(short, long, value_delimiter = ',', value_parser = parse_agent)]
        agents: Vec<Agent>,

        /// Suppress informational output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Regenerate guideline files from the resolved ESLint configuration
    Generate {
        /// File passed to `eslint --print-config` (defaults to auto-detection)
        #[arg(short, long)]
        file: Option<String>,

        /// Agents to generate for (comma-separated, defaults to config or all)
        #[arg(short, long, value_delimiter = ',', value_parser = parse_agent)]
        agents: Vec<Agent>,

        /// Suppress informational output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the generated guidelines without writing any files
    Preview {
        /// File passed to `eslint --print-config` (defaults to auto-detection)
        #[arg(short, long)]
        file: Option<String>,

        /// Also show this agent's header and target path
        #[arg(short, long, value_parser = parse_agent)]
        agent: Option<Agent>,
    },
    /// Report whether the ESLint configuration can be resolved
    Check {
        /// File passed to `eslint --print-config` (defaults to auto-detection)
        #[arg(short, long)]
        file: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse an agent id, suggesting the closest registry entry on a typo.
fn parse_agent(value: &str) -> Result<Agent, String> {
    if let Some(agent) = Agent::from_id(value) {
        return Ok(agent);
    }

    let suggestion = Agent::ALL
        .into_iter()
        .map(|agent| (agent, strsim::jaro_winkler(value, agent.id())))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(agent, _)| agent);

    match suggestion {
        Some(agent) => Err(format!(
            "unknown agent '{value}' (did you mean '{id}'?)",
            id = agent.id()
        )),
        None => Err(format!("unknown agent '{value}'")),
    }
}

/// CI environments default to quiet output.
pub fn ci_quiet_default() -> bool {
    matches!(
        std::env::var("CI").ok().as_deref(),
        Some("true") | Some("1")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_agent_exact_ids() {
        assert_eq!(parse_agent("cursor"), Ok(Agent::Cursor));
        assert_eq!(parse_agent("vscode-copilot"), Ok(Agent::VscodeCopilot));
    }

    #[test]
    fn test_parse_agent_suggests_close_match() {
        let err = parse_agent("cursr").unwrap_err();
        assert!(err.contains("did you mean 'cursor'?"), "got: {err}");

        let err = parse_agent("claud").unwrap_err();
        assert!(err.contains("did you mean 'claude'?"), "got: {err}");
    }

    #[test]
    fn test_parse_agent_no_suggestion_for_garbage() {
        let err = parse_agent("xyzzy").unwrap_err();
        assert!(!err.contains("did you mean"), "got: {err}");
        assert!(err.contains("unknown agent 'xyzzy'"));
    }

    #[test]
    fn test_cli_parses_comma_separated_agents() {
        let cli = Cli::try_parse_from([
            "pleaseai-lint",
            "generate",
            "--agents",
            "cursor,claude",
            "--quiet",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { agents, quiet, .. } => {
                assert_eq!(agents, vec![Agent::Cursor, Agent::Claude]);
                assert!(quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_agent() {
        let result = Cli::try_parse_from(["pleaseai-lint", "generate", "--agents", "emacs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["pleaseai-lint", "check"]).unwrap();
        match cli.command {
            Commands::Check { format, .. } => assert_eq!(format, OutputFormat::Text),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
