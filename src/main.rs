use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pleaseai_lint::cli::{self, Cli, Commands};
use pleaseai_lint::config::Config;
use pleaseai_lint::engine;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = std::env::current_dir()?;

    match cli.command {
        Commands::Init {
            file,
            agents,
            quiet,
        } => {
            let quiet = quiet || cli::ci_quiet_default();
            let mut config = Config::load(None, &root)?;
            if file.is_some() {
                config.target_file = file;
            }

            let report = engine::init(&root, &config, &agents)?;
            cli::report::render_generate(&report, quiet);
        }
        Commands::Generate {
            file,
            agents,
            quiet,
        } => {
            let quiet = quiet || cli::ci_quiet_default();
            let mut config = Config::load(None, &root)?;
            if file.is_some() {
                config.target_file = file;
            }
            if !agents.is_empty() {
                config.agents = agents;
            }

            let report = engine::generate(&root, &config)?;
            cli::report::render_generate(&report, quiet);
        }
        Commands::Preview { file, agent } => {
            let mut config = Config::load(None, &root)?;
            if file.is_some() {
                config.target_file = file;
            }

            let preview = engine::preview(&root, &config, agent)?;
            cli::report::render_preview(&preview);
        }
        Commands::Check { file, format } => {
            let config = Config::load(None, &root)?;
            let target = file.or(config.target_file);

            let status = engine::check(&root, target.as_deref());
            cli::report::render_check(&status, format);
            if !status.ok() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
