//! Main entry point for simloc.

use anyhow::{Context, Result};
use clap::Parser;
use simloc_cli::{App, Args};
use simloc_common::init_logging;
use simloc_config::ConfigLoader;
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    if let Some(level) = &args.log_level {
        ConfigLoader::override_log_level(&mut config, level)
            .context("Invalid --log-level")?;
    }
    init_logging(&config.logging)?;
    debug!(command = ?args.command, "Starting simloc");

    let app = App::from_config(&config)?;
    match app.run(&args.command) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e.into())
        }
    }
}
