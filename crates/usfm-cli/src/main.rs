use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = config::CliConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    if !config.color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let ok = commands::run_command(cli.command, &config, &mut stdout)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
