//! Verdant CLI Application
//!
//! Command-line interface for the Verdant plant care reminder tool.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use verdant_core::CoordinatorBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { data_dir, command } = Args::parse();

    let coordinator = CoordinatorBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .context("Failed to initialize coordinator")?;
    coordinator.initialize().await;

    info!("Verdant started");

    let cli = Cli::new(coordinator);
    match command {
        Some(Commands::Add(args)) => cli.add(args).await,
        Some(Commands::Show(args)) => cli.show(args).await,
        Some(Commands::Remove(args)) => cli.remove(args).await,
        Some(Commands::List) | None => cli.list().await,
    }
}
