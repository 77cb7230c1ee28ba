//! `stockroom`: command-line driver for the inventory store.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.file.clone(), cli.log_format);

    stockroom_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    match commands::run(cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
