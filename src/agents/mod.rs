//! Registry of supported AI coding assistants.
//!
//! Each agent maps to one instruction file plus a write strategy for it.
//! Overwrite agents own their file outright and may carry front matter;
//! append agents share the file with hand-written content and get a
//! marker-delimited section instead.

pub mod writer;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opens the generated section in append-mode files.
pub const MARKER_START: &str = "<!-- pleaseai-lint:start -->";

/// Closes the generated section in append-mode files.
pub const MARKER_END: &str = "<!-- pleaseai-lint:end -->";

/// Glob used for Claude Code front matter when the project supplies none.
const DEFAULT_FILE_PATTERNS: &str = "**/*.{ts,tsx,js,jsx,json,vue,svelte,astro}";

/// Front matter for GitHub Copilot instruction files.
const COPILOT_HEADER: &str = r#"---
applyTo: "**/*.{ts,tsx,js,jsx}"
---"#;

/// Front matter for Cursor `.mdc` rule files.
const CURSOR_HEADER: &str = r#"---
description: ESLint Rules - Code Quality Standards
globs: "**/*.{ts,tsx,js,jsx,json,jsonc,html,vue,svelte,astro,css,yaml,yml,graphql,gql,md,mdx}"
alwaysApply: false
---"#;

/// A supported AI coding assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Agent {
    VscodeCopilot,
    Cursor,
    Windsurf,
    Zed,
    Claude,
    Codex,
    Kiro,
    Cline,
    Amp,
    Aider,
    FirebaseStudio,
    OpenHands,
    GeminiCli,
    Junie,
    Augmentcode,
    KiloCode,
    Goose,
    RooCode,
    Warp,
}

impl Agent {
    /// Every supported agent, in registry order.
    pub const ALL: [Agent; 19] = [
        Agent::VscodeCopilot,
        Agent::Cursor,
        Agent::Windsurf,
        Agent::Zed,
        Agent::Claude,
        Agent::Codex,
        Agent::Kiro,
        Agent::Cline,
        Agent::Amp,
        Agent::Aider,
        Agent::FirebaseStudio,
        Agent::OpenHands,
        Agent::GeminiCli,
        Agent::Junie,
        Agent::Augmentcode,
        Agent::KiloCode,
        Agent::Goose,
        Agent::RooCode,
        Agent::Warp,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        match self {
            Agent::VscodeCopilot => "vscode-copilot",
            Agent::Cursor => "cursor",
            Agent::Windsurf => "windsurf",
            Agent::Zed => "zed",
            Agent::Claude => "claude",
            Agent::Codex => "codex",
            Agent::Kiro => "kiro",
            Agent::Cline => "cline",
            Agent::Amp => "amp",
            Agent::Aider => "aider",
            Agent::FirebaseStudio => "firebase-studio",
            Agent::OpenHands => "open-hands",
            Agent::GeminiCli => "gemini-cli",
            Agent::Junie => "junie",
            Agent::Augmentcode => "augmentcode",
            Agent::KiloCode => "kilo-code",
            Agent::Goose => "goose",
            Agent::RooCode => "roo-code",
            Agent::Warp => "warp",
        }
    }

    /// Look up an agent by its identifier.
    pub fn from_id(id: &str) -> Option<Agent> {
        Agent::ALL.into_iter().find(|agent| agent.id() == id)
    }

    /// Human-readable name for summaries and prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Agent::VscodeCopilot => "GitHub Copilot (VS Code)",
            Agent::Cursor => "Cursor",
            Agent::Windsurf => "Windsurf",
            Agent::Zed => "Zed",
            Agent::Claude => "Claude Code",
            Agent::Codex => "OpenAI Codex",
            Agent::Kiro => "Kiro",
            Agent::Cline => "Cline",
            Agent::Amp => "AMP",
            Agent::Aider => "Aider",
            Agent::FirebaseStudio => "Firebase Studio",
            Agent::OpenHands => "OpenHands",
            Agent::GeminiCli => "Gemini CLI",
            Agent::Junie => "Junie",
            Agent::Augmentcode => "Augment Code",
            Agent::KiloCode => "Kilo Code",
            Agent::Goose => "Goose",
            Agent::RooCode => "Roo Code",
            Agent::Warp => "Warp",
        }
    }

    /// Instruction file location and write strategy for this agent.
    pub fn spec(self) -> AgentSpec {
        let (path, header, append_mode) = match self {
            Agent::VscodeCopilot => (
                "./.github/copilot-instructions.md",
                HeaderSpec::Static(COPILOT_HEADER),
                true,
            ),
            Agent::Cursor => (
                "./.cursor/rules/eslint-rules.mdc",
                HeaderSpec::Static(CURSOR_HEADER),
                false,
            ),
            Agent::Windsurf => ("./.windsurf/rules/eslint-rules.md", HeaderSpec::None, false),
            Agent::Zed => ("./.rules", HeaderSpec::None, true),
            Agent::Claude => ("./.claude/rules/eslint-rules.md", HeaderSpec::FilePatterns, false),
            Agent::Codex => ("./AGENTS.md", HeaderSpec::None, true),
            Agent::Kiro => ("./.kiro/steering/eslint-rules.md", HeaderSpec::None, false),
            Agent::Cline => ("./.clinerules", HeaderSpec::None, true),
            Agent::Amp => ("./AGENT.md", HeaderSpec::None, true),
            Agent::Aider => ("./eslint-rules.md", HeaderSpec::None, false),
            Agent::FirebaseStudio => ("./.idx/airules.md", HeaderSpec::None, true),
            Agent::OpenHands => ("./.openhands/microagents/repo.md", HeaderSpec::None, true),
            Agent::GeminiCli => ("./GEMINI.md", HeaderSpec::None, true),
            Agent::Junie => ("./.junie/guidelines.md", HeaderSpec::None, true),
            Agent::Augmentcode => ("./.augment/rules/eslint-rules.md", HeaderSpec::None, false),
            Agent::KiloCode => ("./.kilocode/rules/eslint-rules.md", HeaderSpec::None, false),
            Agent::Goose => ("./.goosehints", HeaderSpec::None, true),
            Agent::RooCode => ("./.roo/rules/eslint-rules.md", HeaderSpec::None, true),
            Agent::Warp => ("./WARP.md", HeaderSpec::None, true),
        };
        AgentSpec { path, header, append_mode }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where an agent reads its instructions and how they get written.
#[derive(Debug, Clone, Copy)]
pub struct AgentSpec {
    /// Instruction file path, relative to the project root.
    pub path: &'static str,
    /// Front matter placed above the guidelines on full overwrites.
    pub header: HeaderSpec,
    /// Splice a marker-delimited section instead of owning the file.
    pub append_mode: bool,
}

/// How the front matter above the generated guidelines is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSpec {
    /// The file starts with the guidelines themselves.
    None,
    /// Fixed front matter, independent of the project.
    Static(&'static str),
    /// `paths:` front matter built from the project's file patterns.
    FilePatterns,
}

impl HeaderSpec {
    /// Render the header for the given file patterns, if there is one.
    pub fn render(self, file_patterns: &[String]) -> Option<String> {
        match self {
            HeaderSpec::None => None,
            HeaderSpec::Static(header) => Some(header.to_string()),
            HeaderSpec::FilePatterns => {
                let patterns = if file_patterns.is_empty() {
                    DEFAULT_FILE_PATTERNS.to_string()
                } else {
                    file_patterns.join(", ")
                };
                Some(format!("---\npaths: \"{patterns}\"\n---"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_id_round_trips() {
        for agent in Agent::ALL {
            assert_eq!(Agent::from_id(agent.id()), Some(agent));
        }
        assert_eq!(Agent::from_id("emacs"), None);
    }

    #[test]
    fn test_serde_ids_match_registry_ids() {
        for agent in Agent::ALL {
            let value = serde_json::to_value(agent).unwrap();
            assert_eq!(value, serde_json::Value::String(agent.id().to_string()));

            let parsed: Agent = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, agent);
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = Agent::ALL.iter().map(|agent| agent.spec().path).collect();
        assert_eq!(paths.len(), Agent::ALL.len());
    }

    #[test]
    fn test_registry_spot_checks() {
        let copilot = Agent::VscodeCopilot.spec();
        assert_eq!(copilot.path, "./.github/copilot-instructions.md");
        assert!(copilot.append_mode);
        assert!(matches!(copilot.header, HeaderSpec::Static(_)));

        let cursor = Agent::Cursor.spec();
        assert_eq!(cursor.path, "./.cursor/rules/eslint-rules.mdc");
        assert!(!cursor.append_mode);

        let codex = Agent::Codex.spec();
        assert_eq!(codex.path, "./AGENTS.md");
        assert!(codex.append_mode);

        let claude = Agent::Claude.spec();
        assert_eq!(claude.header, HeaderSpec::FilePatterns);
        assert!(!claude.append_mode);
    }

    #[test]
    fn test_append_and_overwrite_split() {
        let append = Agent::ALL.iter().filter(|agent| agent.spec().append_mode).count();
        assert_eq!(append, 12);
        assert_eq!(Agent::ALL.len() - append, 7);
    }

    #[test]
    fn test_static_header_rendered_verbatim() {
        let header = Agent::VscodeCopilot.spec().header.render(&[]).unwrap();
        assert_eq!(header, "---\napplyTo: \"**/*.{ts,tsx,js,jsx}\"\n---");

        let cursor = Agent::Cursor.spec().header.render(&[]).unwrap();
        assert!(cursor.starts_with("---\ndescription: ESLint Rules"));
        assert!(cursor.ends_with("alwaysApply: false\n---"));
    }

    #[test]
    fn test_file_patterns_header_defaults() {
        let header = HeaderSpec::FilePatterns.render(&[]).unwrap();
        assert_eq!(
            header,
            "---\npaths: \"**/*.{ts,tsx,js,jsx,json,vue,svelte,astro}\"\n---"
        );
    }

    #[test]
    fn test_file_patterns_header_joins_patterns() {
        let patterns = vec!["src/**/*.ts".to_string(), "lib/**/*.tsx".to_string()];
        let header = HeaderSpec::FilePatterns.render(&patterns).unwrap();
        assert_eq!(header, "---\npaths: \"src/**/*.ts, lib/**/*.tsx\"\n---");
    }

    #[test]
    fn test_no_header_for_plain_agents() {
        assert_eq!(Agent::Windsurf.spec().header.render(&[]), None);
        assert_eq!(Agent::Goose.spec().header.render(&[]), None);
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(Agent::GeminiCli.to_string(), "gemini-cli");
        assert_eq!(Agent::Warp.to_string(), "warp");
    }

    #[test]
    fn test_display_names_cover_all_agents() {
        for agent in Agent::ALL {
            assert!(!agent.display_name().is_empty());
        }
        assert_eq!(Agent::VscodeCopilot.display_name(), "GitHub Copilot (VS Code)");
        assert_eq!(Agent::Amp.display_name(), "AMP");
    }
}
