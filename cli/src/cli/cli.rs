// cli/src/cli/cli.rs

use anyhow::{Context, Result};
use clap::Parser;
use intake_lib::IntakeConfig;

use crate::cli::commands::{CacheAction, CliArgs, IntakeCommand};
use crate::cli::handlers;

// CLI entry point
pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let config = IntakeConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        Some(IntakeCommand::Refs { target }) => handlers::handle_refs(&config, target).await,
        Some(IntakeCommand::Doctors(doctors_args)) => handlers::handle_doctors(&config, doctors_args).await,
        Some(IntakeCommand::Submit(submit_args)) => handlers::handle_submit(&config, submit_args).await,
        Some(IntakeCommand::Cache { action: CacheAction::Clear }) => handlers::handle_cache_clear(&config),
        Some(IntakeCommand::Fill) | None => handlers::handle_fill(&config).await,
    }
}
