mod cli;
mod logging;
mod render_cmd;
mod serve_cmd;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use leave_planner::config::{ConfigLoader, PlannerConfig};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render_cmd::run(args),
        Command::Serve(args) => serve_cmd::run(args),
    }
}

/// Loads the configuration file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => {
            let loader = ConfigLoader::load(path)
                .with_context(|| format!("failed to load config file: {}", path.display()))?;
            Ok(loader.into_config())
        }
        None => Ok(PlannerConfig::default()),
    }
}
