//! Human-facing output for the command-line interface.
//!
//! Generated markdown goes to stdout untouched; everything else is
//! summary chrome and stays pipe-friendly.

use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::engine::{CheckStatus, GenerateReport, Preview};

/// Print the post-generation summary.
pub fn render_generate(report: &GenerateReport, quiet: bool) {
    if quiet {
        return;
    }

    println!(
        "Loaded {active} active ESLint rules ({total} configured)",
        active = report.active_rules,
        total = report.total_rules
    );
    println!("Detected plugins: {}", plugins_line(&report.plugins));
    println!();

    let succeeded: Vec<_> = report.succeeded().collect();
    let failed: Vec<_> = report.failed().collect();

    println!(
        "{} Generated rules for {} AI tools:",
        "\u{2713}".green(),
        succeeded.len().bold()
    );
    for outcome in &succeeded {
        println!("  - {}: {}", outcome.agent, outcome.path.dimmed());
    }

    if !failed.is_empty() {
        println!();
        println!(
            "{} Failed for {} tools:",
            "\u{2717}".red(),
            failed.len().bold()
        );
        for outcome in &failed {
            let detail = outcome.error.as_deref().unwrap_or("unknown error");
            println!("  - {}: {}", outcome.agent, detail.red());
        }
    }
}

/// Print the configuration status for `check`.
pub fn render_check(status: &CheckStatus, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(status).unwrap()),
        OutputFormat::Text => render_check_text(status),
    }
}

fn render_check_text(status: &CheckStatus) {
    if !status.config_found {
        println!("{} No ESLint flat config found", "\u{2717}".red());
        println!("  Expected eslint.config.js, eslint.config.mjs, or eslint.config.cjs");
        return;
    }

    println!("{} ESLint config found", "\u{2713}".green());

    if status.config_valid {
        println!(
            "{} Resolved {} active rules ({} configured)",
            "\u{2713}".green(),
            status.active_rules.bold(),
            status.total_rules
        );
        println!("  Plugins: {}", plugins_line(&status.plugins));
    } else {
        println!("{} Failed to resolve configuration", "\u{2717}".red());
        if let Some(error) = &status.error {
            println!("  {}", error.red());
        }
    }
}

/// Print a preview: metadata on stderr, the document itself on stdout.
pub fn render_preview(preview: &Preview) {
    if let Some(agent) = preview.agent {
        eprintln!("{} {} ({agent})", "Agent:".bold(), agent.display_name());
        if let Some(path) = &preview.path {
            eprintln!("{} {path}", "Path:".bold());
        }
        eprintln!(
            "{} {active} active of {total} configured, plugins: {plugins}",
            "Rules:".bold(),
            active = preview.active_rules,
            total = preview.total_rules,
            plugins = plugins_line(&preview.plugins)
        );
        eprintln!();
    }

    if let Some(header) = &preview.header {
        println!("{header}");
        println!();
    }
    println!("{}", preview.content);
}

fn plugins_line(plugins: &[String]) -> String {
    if plugins.is_empty() {
        "None".to_string()
    } else {
        plugins.join(", ")
    }
}
